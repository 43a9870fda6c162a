//! Mapping between schema fields and physical row columns.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// How fields are matched to row columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The field at declaration position `i` reads column `i + 1`.
    #[default]
    ByOrder,
    /// Each field reads its `index` constraint, falling back to its
    /// 1-based declaration position when no valid index is declared.
    ByIndex,
}

/// Precomputed field-to-column table for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResolver {
    resolution: Resolution,
    /// 1-based column for each field, in declaration order.
    columns: Vec<usize>,
}

impl ColumnResolver {
    pub fn new(fields: &[Field], resolution: Resolution) -> Self {
        let columns = fields
            .iter()
            .enumerate()
            .map(|(position, field)| match resolution {
                Resolution::ByOrder => position + 1,
                Resolution::ByIndex => field
                    .constraints()
                    .index
                    .filter(|&index| index > 0)
                    .unwrap_or(position + 1),
            })
            .collect();

        Self {
            resolution,
            columns,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Resolved 1-based columns, in field declaration order.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Column read by the field at `position` (0-based declaration order).
    pub fn column_for(&self, position: usize) -> Option<usize> {
        self.columns.get(position).copied()
    }

    /// Declaration position of the field reading `column`.
    ///
    /// When several fields resolve to the same column the last one declared
    /// wins.
    pub fn field_at(&self, column: usize) -> Option<usize> {
        self.columns.iter().rposition(|&c| c == column)
    }

    /// Highest column any field reads.
    pub fn max_column(&self) -> Option<usize> {
        self.columns.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Constraints;

    fn indexed(name: &str, index: usize) -> Field {
        Field::new(name, Constraints::new().index(index)).unwrap()
    }

    #[test]
    fn test_order_ignores_index() {
        let fields = vec![indexed("a", 3), indexed("b", 1)];
        let resolver = ColumnResolver::new(&fields, Resolution::ByOrder);

        assert_eq!(resolver.columns(), &[1, 2]);
    }

    #[test]
    fn test_index_with_position_fallback() {
        let fields = vec![
            indexed("third", 3),
            Field::unconstrained("second"),
            indexed("first", 1),
        ];
        let resolver = ColumnResolver::new(&fields, Resolution::ByIndex);

        assert_eq!(resolver.columns(), &[3, 2, 1]);
        assert_eq!(resolver.column_for(1), Some(2));
        assert_eq!(resolver.column_for(3), None);
        assert_eq!(resolver.field_at(1), Some(2));
        assert_eq!(resolver.field_at(4), None);
        assert_eq!(resolver.max_column(), Some(3));
    }

    #[test]
    fn test_duplicate_index_last_declared_wins() {
        let fields = vec![indexed("a", 1), indexed("b", 1), indexed("c", 2)];
        let resolver = ColumnResolver::new(&fields, Resolution::ByIndex);

        assert_eq!(resolver.columns(), &[1, 1, 2]);
        assert_eq!(resolver.field_at(1), Some(1));
    }

    #[test]
    fn test_literal_index_zero_falls_back_to_position() {
        let zero = Constraints {
            index: Some(0),
            ..Constraints::default()
        };
        let fields = vec![Field::unconstrained("a"), Field::new("b", zero).unwrap()];
        let resolver = ColumnResolver::new(&fields, Resolution::ByIndex);

        assert_eq!(resolver.columns(), &[1, 2]);
        assert_eq!(resolver.field_at(0), None);
    }

    #[test]
    fn test_empty_fields() {
        let resolver = ColumnResolver::new(&[], Resolution::ByIndex);
        assert!(resolver.columns().is_empty());
        assert_eq!(resolver.max_column(), None);
    }
}
