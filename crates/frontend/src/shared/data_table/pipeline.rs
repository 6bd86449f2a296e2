//! Конвейер таблицы: фильтр → сортировка → страница.
//!
//! Чистые функции над `(data, columns, state)`; работают с индексами строк,
//! сами строки не копируются.

use std::cmp::Ordering;

use super::column::{ColumnDef, TableRecord};
use super::state::{SortDirection, SortSpec, TableState};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableView {
    /// Indices into `data` for the visible page, in display order
    pub rows: Vec<usize>,
    /// Rows left after filtering, before pagination
    pub filtered_count: usize,
    pub page_count: usize,
    /// Page index actually shown (already clamped)
    pub page_index: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Indices of rows where at least one filterable column contains `filter`
/// (case-insensitive). Empty filter keeps every row in original order.
pub fn filter_rows<T: TableRecord>(data: &[T], columns: &[ColumnDef<T>], filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return (0..data.len()).collect();
    }

    let filterable: Vec<&ColumnDef<T>> = columns.iter().filter(|c| c.is_filterable()).collect();
    data.iter()
        .enumerate()
        .filter(|(_, row)| {
            filterable.iter().any(|column| {
                column
                    .value(row)
                    .filter_text()
                    .to_lowercase()
                    .contains(&needle)
            })
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Stable sort of `rows` by the active sort specs.
///
/// Ties keep their original order in the direction of the first spec, so a
/// single descending column yields exactly the reverse of the ascending order.
pub fn sort_rows<T: TableRecord>(
    data: &[T],
    columns: &[ColumnDef<T>],
    sorting: &[SortSpec],
    rows: &mut [usize],
) {
    let active: Vec<(&ColumnDef<T>, SortDirection)> = sorting
        .iter()
        .filter_map(|spec| {
            columns
                .iter()
                .find(|c| c.id == spec.column_id && c.is_sortable())
                .map(|c| (c, spec.direction))
        })
        .collect();

    let Some(&(_, first_direction)) = active.first() else {
        return;
    };

    // Значения читаем один раз, а не на каждое сравнение
    let keys: Vec<Vec<_>> = rows
        .iter()
        .map(|&idx| active.iter().map(|(c, _)| c.value(&data[idx])).collect())
        .collect();
    let mut order: Vec<usize> = (0..rows.len()).collect();

    order.sort_by(|&a, &b| {
        let by_keys = active
            .iter()
            .enumerate()
            .map(|(k, (_, direction))| {
                let cmp = keys[a][k].compare(&keys[b][k]);
                match direction {
                    SortDirection::Ascending => cmp,
                    SortDirection::Descending => cmp.reverse(),
                }
            })
            .find(|cmp| *cmp != Ordering::Equal)
            .unwrap_or(Ordering::Equal);

        by_keys.then_with(|| match first_direction {
            SortDirection::Ascending => rows[a].cmp(&rows[b]),
            SortDirection::Descending => rows[b].cmp(&rows[a]),
        })
    });

    let sorted: Vec<usize> = order.into_iter().map(|pos| rows[pos]).collect();
    rows.copy_from_slice(&sorted);
}

/// Filters, sorts and slices one page. The page index in `state` is clamped
/// on every call, so shrinking data never produces an out-of-range page.
pub fn compute_view<T: TableRecord>(data: &[T], columns: &[ColumnDef<T>], state: &TableState) -> TableView {
    let mut rows = filter_rows(data, columns, &state.global_filter);
    sort_rows(data, columns, &state.sorting, &mut rows);

    let filtered_count = rows.len();
    let page_count = state.pagination.page_count(filtered_count);
    let page_index = state.pagination.clamped_index(page_count);
    let page_size = state.pagination.page_size.max(1);

    let start = (page_index * page_size).min(filtered_count);
    let end = (start + page_size).min(filtered_count);

    TableView {
        rows: rows[start..end].to_vec(),
        filtered_count,
        page_count,
        page_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::helpers::{number_column, text_column};
    use crate::shared::data_table::value::CellValue;

    #[derive(Clone, Debug, PartialEq)]
    struct Pupil {
        id: String,
        name: String,
        grade: i64,
    }

    impl TableRecord for Pupil {
        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "id" => Some(self.id.clone().into()),
                "name" => Some(self.name.clone().into()),
                "grade" => Some(self.grade.into()),
                _ => None,
            }
        }
    }

    fn pupil(id: usize, name: &str, grade: i64) -> Pupil {
        Pupil {
            id: id.to_string(),
            name: name.to_string(),
            grade,
        }
    }

    fn columns() -> Vec<ColumnDef<Pupil>> {
        vec![
            text_column("name", "Name"),
            number_column("grade", "Grade"),
            text_column("id", "Id"),
        ]
    }

    fn many(n: usize) -> Vec<Pupil> {
        (1..=n)
            .map(|i| pupil(i, &format!("Pupil {:02}", i), (i % 4) as i64))
            .collect()
    }

    #[test]
    fn test_filter_scenario() {
        let data = vec![
            Pupil { id: "1".into(), name: "Amina".into(), grade: 3 },
            Pupil { id: "2".into(), name: "Bilal".into(), grade: 4 },
        ];
        let cols = columns();
        assert_eq!(filter_rows(&data, &cols, "ami"), vec![0]);
        assert_eq!(filter_rows(&data, &cols, "AMI"), vec![0]);
        assert!(filter_rows(&data, &cols, "z").is_empty());

        let mut state = TableState::new(10);
        state.set_global_filter("z");
        let view = compute_view(&data, &cols, &state);
        assert!(view.is_empty());
        assert_eq!(view.page_count, 0);
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn test_empty_filter_keeps_all_in_order() {
        let data = many(7);
        assert_eq!(filter_rows(&data, &columns(), ""), (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_matches_any_column() {
        let data = many(12);
        let cols = columns();
        let hits = filter_rows(&data, &cols, "1");
        for (idx, row) in data.iter().enumerate() {
            let expected = row.id.contains('1')
                || row.name.to_lowercase().contains('1')
                || row.grade.to_string().contains('1');
            assert_eq!(hits.contains(&idx), expected);
        }
    }

    #[test]
    fn test_non_filterable_column_ignored() {
        let data = vec![pupil(1, "Amina", 3)];
        let cols = vec![text_column::<Pupil>("name", "Name").not_filterable()];
        assert!(filter_rows(&data, &cols, "ami").is_empty());
    }

    #[test]
    fn test_descending_is_exact_reverse_with_ties() {
        let data = many(13);
        let cols = columns();
        let mut state = TableState::new(100);

        state.toggle_sort("grade");
        let asc = compute_view(&data, &cols, &state).rows;
        // stable: equal grades keep original order
        let grades: Vec<i64> = asc.iter().map(|&i| data[i].grade).collect();
        assert!(grades.windows(2).all(|w| w[0] <= w[1]));
        for w in asc.windows(2) {
            if data[w[0]].grade == data[w[1]].grade {
                assert!(w[0] < w[1]);
            }
        }

        state.toggle_sort("grade");
        let desc = compute_view(&data, &cols, &state).rows;
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);

        state.toggle_sort("grade");
        let unsorted = compute_view(&data, &cols, &state).rows;
        assert_eq!(unsorted, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_numeric_not_lexicographic() {
        let data = vec![pupil(1, "a", 10), pupil(2, "b", 9), pupil(3, "c", 100)];
        let mut state = TableState::new(10);
        state.toggle_sort("grade");
        let rows = compute_view(&data, &columns(), &state).rows;
        assert_eq!(rows, vec![1, 0, 2]);
    }

    #[test]
    fn test_sort_by_unknown_column_is_noop() {
        let data = many(5);
        let mut state = TableState::new(10);
        state.toggle_sort("nope");
        let rows = compute_view(&data, &columns(), &state).rows;
        assert_eq!(rows, (0..5).collect::<Vec<_>>());
    }

    #[test]
    fn test_pages_cover_rows_exactly_once() {
        let data = many(23);
        let cols = columns();
        for page_size in 1..=25 {
            let mut state = TableState::new(page_size);
            state.set_global_filter("pupil");
            state.toggle_sort("grade");
            let full = {
                let mut all = TableState::new(usize::MAX / 2);
                all.set_global_filter("pupil");
                all.toggle_sort("grade");
                compute_view(&data, &cols, &all).rows
            };

            let first = compute_view(&data, &cols, &state);
            let mut collected = Vec::new();
            for page in 0..first.page_count {
                state.go_to_page(page);
                collected.extend(compute_view(&data, &cols, &state).rows);
            }
            assert_eq!(collected, full, "page_size {}", page_size);
        }
    }

    #[test]
    fn test_page_clamped_when_data_shrinks() {
        let cols = columns();
        let mut state = TableState::new(10);
        state.go_to_page(2);

        let data = many(25);
        let view = compute_view(&data, &cols, &state);
        assert_eq!(view.page_index, 2);
        assert_eq!(view.rows.len(), 5);

        let shrunk = many(12);
        let view = compute_view(&shrunk, &cols, &state);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.page_index, 1);
        assert_eq!(view.rows, vec![10, 11]);

        let none: Vec<Pupil> = Vec::new();
        let view = compute_view(&none, &cols, &state);
        assert_eq!(view.page_index, 0);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_page_size_change_scenario() {
        let data = many(25);
        let cols = columns();
        let mut state = TableState::new(10);
        state.go_to_page(2);
        let view = compute_view(&data, &cols, &state);
        assert_eq!(view.rows, (20..25).collect::<Vec<_>>());

        state.set_page_size(20);
        let view = compute_view(&data, &cols, &state);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.rows, (0..20).collect::<Vec<_>>());
        assert!(!view.can_previous());
        assert!(view.can_next());
    }
}
