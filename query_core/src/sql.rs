//! SQL rendering
//!
//! Renders query plans into parameterized PostgreSQL statements for the
//! sqlx-backed port. Field names are validated before a plan can exist, so
//! the renderer interpolates them directly and binds all comparison values
//! as `$n` placeholders.

use crate::filter::Predicate;
use crate::plan::{OrderSpec, PageWindow, Projection, QueryPlan};
use serde_json::Value;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from the predicate tree.
    ///
    /// The identity predicate renders as no clause at all. Non-empty clauses
    /// carry a leading space so they append cleanly.
    pub fn build_where_clause(predicate: &Predicate) -> (String, Vec<Value>) {
        if predicate.is_all() {
            return (String::new(), Vec::new());
        }

        let mut values = Vec::new();
        let mut param_counter = 1;
        let sql = Self::render_predicate(predicate, &mut values, &mut param_counter);

        if sql.is_empty() {
            (String::new(), values)
        } else {
            (format!(" WHERE {}", sql), values)
        }
    }

    fn render_predicate(
        predicate: &Predicate,
        values: &mut Vec<Value>,
        param_counter: &mut i32,
    ) -> String {
        match predicate {
            // Only reachable nested inside a hand-built conjunction
            Predicate::All => "TRUE".to_string(),
            Predicate::Equals { field, value } => {
                values.push(value.clone());
                let param = format!("${}", param_counter);
                *param_counter += 1;
                format!("{} = {}", field, param)
            }
            Predicate::Range {
                field,
                lower,
                upper,
            } => {
                let mut parts = Vec::new();
                if let Some(lo) = lower {
                    values.push(lo.clone());
                    parts.push(format!("{} >= ${}", field, param_counter));
                    *param_counter += 1;
                }
                if let Some(hi) = upper {
                    values.push(hi.clone());
                    parts.push(format!("{} <= ${}", field, param_counter));
                    *param_counter += 1;
                }
                if parts.is_empty() {
                    "TRUE".to_string()
                } else {
                    parts.join(" AND ")
                }
            }
            Predicate::And(children) => children
                .iter()
                .map(|child| Self::render_predicate(child, values, param_counter))
                .collect::<Vec<_>>()
                .join(" AND "),
        }
    }

    /// Build ORDER BY clause; explicit null positions are rendered, the
    /// PostgreSQL defaults are left implicit
    pub fn build_order_clause(order: &OrderSpec) -> String {
        if order.is_empty() {
            return String::new();
        }

        let order_items: Vec<String> = order
            .keys()
            .iter()
            .map(|key| {
                let mut item = format!("{} {}", key.field, key.order.to_sql());
                if let Some(nulls) = key.nulls {
                    item.push(' ');
                    item.push_str(nulls.to_sql());
                }
                item
            })
            .collect();

        format!(" ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_window_clause(window: Option<&PageWindow>) -> String {
        match window {
            Some(window) => format!(" LIMIT {} OFFSET {}", window.limit(), window.offset()),
            None => String::new(),
        }
    }

    /// Build SELECT list from the projection
    pub fn build_select_clause(projection: &Projection) -> String {
        if projection.fields().is_empty() {
            return "*".to_string();
        }
        projection.fields().join(", ")
    }

    /// Build the complete row query for a plan
    pub fn build_select_query(plan: &QueryPlan, table: &str) -> (String, Vec<Value>) {
        let select_clause = Self::build_select_clause(plan.projection());
        let (where_clause, values) = Self::build_where_clause(plan.predicate());
        let order_clause = Self::build_order_clause(plan.order());
        let window_clause = Self::build_window_clause(plan.window());

        let sql = format!(
            "SELECT {} FROM {}{}{}{}",
            select_clause, table, where_clause, order_clause, window_clause
        );
        (sql, values)
    }

    /// Build the count query for a predicate, ignoring ordering and
    /// pagination
    pub fn build_count_query(predicate: &Predicate, table: &str) -> (String, Vec<Value>) {
        let (where_clause, values) = Self::build_where_clause(predicate);
        let sql = format!("SELECT COUNT(*) FROM {}{}", table, where_clause);
        (sql, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSpec;
    use crate::plan::{NullOrder, OrderSpec, PageWindow, Projection, QueryPlan, SortKey};
    use serde_json::json;

    fn projection() -> Projection {
        Projection::new(["member_id", "username", "age", "team_name"])
    }

    #[test]
    fn test_match_all_renders_no_where_clause() {
        let (sql, values) = SqlGenerator::build_where_clause(&Predicate::All);
        assert_eq!(sql, "");
        assert!(values.is_empty());
    }

    #[test]
    fn test_equals_clause() {
        let predicate = Predicate::eq("username", json!("member1"));
        let (sql, values) = SqlGenerator::build_where_clause(&predicate);

        assert_eq!(sql, " WHERE username = $1");
        assert_eq!(values, vec![json!("member1")]);
    }

    #[test]
    fn test_range_clause_with_both_bounds() {
        let predicate = Predicate::range("age", Some(json!(20)), Some(json!(40)));
        let (sql, values) = SqlGenerator::build_where_clause(&predicate);

        assert_eq!(sql, " WHERE age >= $1 AND age <= $2");
        assert_eq!(values, vec![json!(20), json!(40)]);
    }

    #[test]
    fn test_single_bound_range_clauses() {
        let lower = Predicate::range("age", Some(json!(18)), None);
        let (sql, _) = SqlGenerator::build_where_clause(&lower);
        assert_eq!(sql, " WHERE age >= $1");

        let upper = Predicate::range("age", None, Some(json!(65)));
        let (sql, _) = SqlGenerator::build_where_clause(&upper);
        assert_eq!(sql, " WHERE age <= $1");
    }

    #[test]
    fn test_conjunction_parameter_numbering() {
        let predicate = FilterSpec::new()
            .text_eq("username", Some("member1"))
            .text_eq("team_name", Some("teamA"))
            .range("age", Some(20), Some(40))
            .compose()
            .unwrap();
        let (sql, values) = SqlGenerator::build_where_clause(&predicate);

        assert_eq!(
            sql,
            " WHERE username = $1 AND team_name = $2 AND age >= $3 AND age <= $4"
        );
        assert_eq!(
            values,
            vec![json!("member1"), json!("teamA"), json!(20), json!(40)]
        );
    }

    #[test]
    fn test_order_clause_with_null_position() {
        let order = OrderSpec::new()
            .desc("age")
            .key(SortKey::asc("username").nulls(NullOrder::Last));

        assert_eq!(
            SqlGenerator::build_order_clause(&order),
            " ORDER BY age DESC, username ASC NULLS LAST"
        );
    }

    #[test]
    fn test_empty_order_clause() {
        assert_eq!(SqlGenerator::build_order_clause(&OrderSpec::new()), "");
    }

    #[test]
    fn test_window_clause() {
        let window = PageWindow::new(40, 20).unwrap();
        assert_eq!(
            SqlGenerator::build_window_clause(Some(&window)),
            " LIMIT 20 OFFSET 40"
        );
        assert_eq!(SqlGenerator::build_window_clause(None), "");
    }

    #[test]
    fn test_full_select_query() {
        let plan = QueryPlan::build(
            FilterSpec::new()
                .text_eq("team_name", Some("teamB"))
                .range("age", Some(35), Some(40))
                .compose()
                .unwrap(),
            OrderSpec::new().desc("age"),
            Some(PageWindow::new(0, 10).unwrap()),
            projection(),
        )
        .unwrap();

        let (sql, values) = SqlGenerator::build_select_query(&plan, "members");
        assert_eq!(
            sql,
            "SELECT member_id, username, age, team_name FROM members \
             WHERE team_name = $1 AND age >= $2 AND age <= $3 \
             ORDER BY age DESC LIMIT 10 OFFSET 0"
        );
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_count_query_ignores_order_and_window() {
        let predicate = Predicate::eq("team_name", json!("teamA"));
        let (sql, values) = SqlGenerator::build_count_query(&predicate, "members");

        assert_eq!(sql, "SELECT COUNT(*) FROM members WHERE team_name = $1");
        assert_eq!(values, vec![json!("teamA")]);
    }

    #[test]
    fn test_match_all_count_query() {
        let (sql, values) = SqlGenerator::build_count_query(&Predicate::All, "members");
        assert_eq!(sql, "SELECT COUNT(*) FROM members");
        assert!(values.is_empty());
    }
}
