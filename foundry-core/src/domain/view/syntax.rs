// foundry-core/src/domain/view/syntax.rs
//
// Rendered views are parsed with the BigQuery dialect before being
// written out, so template mistakes surface at render time instead of in
// the warehouse.

use sqlparser::ast::Statement;
use sqlparser::dialect::BigQueryDialect;
use sqlparser::parser::{Parser, ParserError};

pub fn parse_bigquery(sql: &str) -> Result<Vec<Statement>, ParserError> {
    Parser::parse_sql(&BigQueryDialect {}, sql)
}
