use automapper_types::{GenerationFlags, Table};

use super::BODY_INDENT;
use crate::guard::ConditionalClause;
use crate::naming;

/// Width the column name is padded to in a predicate.
pub const PREDICATE_COLUMN_WIDTH: usize = 20;

/// The primary-key `<where>` block shared by SELECT, UPDATE and DELETE.
///
/// One `AND <column> = #{token}` predicate per primary-key column, in column order,
/// each guarded when `flags.where_guards` is set. A table without primary-key columns
/// yields an empty `<where>` element, i.e. a statement that matches every row.
pub fn predicate_block(table: &Table, flags: GenerationFlags) -> String {
    let guard = ConditionalClause::new(flags.where_guards);
    let mut out = format!("{BODY_INDENT}<where>\n");

    for column in table.primary_keys() {
        let token = naming::resolve(&column.name, flags.param_style);
        let predicate = format!(
            "AND {:<width$}= {}",
            column.name,
            naming::placeholder(&token),
            width = PREDICATE_COLUMN_WIDTH
        );
        guard.block(&mut out, BODY_INDENT, &token, &column.data_type, &predicate);
    }

    out.push_str(BODY_INDENT);
    out.push_str("</where>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use automapper_types::{ColumnDescriptor, ParamStyle};

    fn table() -> Table {
        Table::new(
            "ORDER_ITEM",
            vec![
                ColumnDescriptor::new("ORDER_NO", "VARCHAR2(20)").primary(),
                ColumnDescriptor::new("QTY", "NUMBER"),
                ColumnDescriptor::new("ITEM_SEQ", "NUMBER(5)").primary(),
            ],
        )
    }

    #[test]
    fn unguarded() {
        let out = predicate_block(&table(), GenerationFlags::default());
        assert_eq!(
            out,
            concat!(
                "        <where>\n",
                "        AND ORDER_NO            = #{order_no}\n",
                "        AND ITEM_SEQ            = #{item_seq}\n",
                "        </where>\n",
            )
        );
    }

    #[test]
    fn guarded_by_type() {
        let flags = GenerationFlags::default()
            .with_where_guards(true)
            .with_param_style(ParamStyle::HashMap);
        let out = predicate_block(&table(), flags);
        assert_eq!(
            out,
            concat!(
                "        <where>\n",
                "        <if test=\"P_ORDER_NO != null and P_ORDER_NO != ''\">\n",
                "        AND ORDER_NO            = #{P_ORDER_NO}\n",
                "        </if>\n",
                "        <if test=\"P_ITEM_SEQ != null\">\n",
                "        AND ITEM_SEQ            = #{P_ITEM_SEQ}\n",
                "        </if>\n",
                "        </where>\n",
            )
        );
    }

    #[test]
    fn long_names_are_not_truncated() {
        let table = Table::new(
            "T",
            vec![ColumnDescriptor::new("A_VERY_LONG_PRIMARY_KEY_NAME", "NUMBER").primary()],
        );
        let out = predicate_block(&table, GenerationFlags::default());
        assert!(out.contains("AND A_VERY_LONG_PRIMARY_KEY_NAME= #{a_very_long_primary_key_name}"));
    }

    #[test]
    fn no_primary_key() {
        let table = Table::new("LOG", vec![ColumnDescriptor::new("MSG", "VARCHAR2(4000)")]);
        let out = predicate_block(&table, GenerationFlags::default().with_where_guards(true));
        assert_eq!(out, "        <where>\n        </where>\n");
    }
}
