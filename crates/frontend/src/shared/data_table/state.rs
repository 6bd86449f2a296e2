//! Локальное состояние таблицы: сортировка, глобальный фильтр, пагинация.
//!
//! Состояние не зависит от данных; границы страниц пересчитываются
//! в `pipeline::compute_view` на каждом рендере.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column_id: String,
    pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.max(1))
    }

    /// Largest valid page index for `page_count` pages (0 when there are none)
    pub fn clamped_index(&self, page_count: usize) -> usize {
        self.page_index.min(page_count.saturating_sub(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub sorting: Vec<SortSpec>,
    pub global_filter: String,
    pub pagination: Pagination,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sorting: Vec::new(),
            global_filter: String::new(),
            pagination: Pagination::new(page_size),
        }
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }

    /// Header click: new column → ascending, ascending → descending, descending → unsorted.
    /// Sorting by another column drops the previous sort.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let next = match self.sort_direction(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.sorting.clear();
        if let Some(direction) = next {
            self.sorting.push(SortSpec {
                column_id: column_id.to_string(),
                direction,
            });
        }
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.global_filter = text.into();
        self.pagination.page_index = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page_index = 0;
    }

    pub fn go_to_page(&mut self, page_index: usize) {
        self.pagination.page_index = page_index;
    }

    pub fn next_page(&mut self, page_count: usize) {
        if self.can_next(page_count) {
            self.pagination.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_previous() {
            self.pagination.page_index -= 1;
        }
    }

    pub fn can_previous(&self) -> bool {
        self.pagination.page_index > 0
    }

    pub fn can_next(&self, page_count: usize) -> bool {
        self.pagination.page_index + 1 < page_count
    }

    /// Pulls the page index back into range after the row count shrank.
    /// Returns true when the index changed.
    pub fn clamp(&mut self, page_count: usize) -> bool {
        let clamped = self.pagination.clamped_index(page_count);
        let changed = clamped != self.pagination.page_index;
        self.pagination.page_index = clamped;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle_on_one_column() {
        let mut state = TableState::new(10);
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Descending));
        state.toggle_sort("name");
        assert!(state.sorting.is_empty());
    }

    #[test]
    fn test_other_column_replaces_sort() {
        let mut state = TableState::new(10);
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.toggle_sort("age");
        assert_eq!(state.sorting.len(), 1);
        assert_eq!(state.sort_direction("name"), None);
        assert_eq!(state.sort_direction("age"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_filter_and_page_size_reset_page() {
        let mut state = TableState::new(10);
        state.go_to_page(3);
        state.set_global_filter("ami");
        assert_eq!(state.pagination.page_index, 0);

        state.go_to_page(2);
        state.set_page_size(20);
        assert_eq!(state.pagination.page_index, 0);
        assert_eq!(state.pagination.page_size, 20);
    }

    #[test]
    fn test_page_size_never_zero() {
        let mut state = TableState::new(0);
        assert_eq!(state.pagination.page_size, 1);
        state.set_page_size(0);
        assert_eq!(state.pagination.page_size, 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = TableState::new(10);
        assert!(!state.can_previous());
        state.previous_page();
        assert_eq!(state.pagination.page_index, 0);

        state.next_page(2);
        assert_eq!(state.pagination.page_index, 1);
        assert!(!state.can_next(2));
        state.next_page(2);
        assert_eq!(state.pagination.page_index, 1);

        assert!(!state.can_next(0));
    }

    #[test]
    fn test_clamp() {
        let mut state = TableState::new(10);
        state.go_to_page(5);
        assert!(state.clamp(3));
        assert_eq!(state.pagination.page_index, 2);
        assert!(state.clamp(0));
        assert_eq!(state.pagination.page_index, 0);
        assert!(!state.clamp(0));
    }

    #[test]
    fn test_page_count() {
        let p = Pagination::new(10);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(25), 3);
    }
}
