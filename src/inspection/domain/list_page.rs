/// ListPage - one page of a paginated collection
///
/// `total` is the backend's reported number of matching rows, when it
/// reports one. `received` is the number of rows the backend returned,
/// which stays fixed when rows are later dropped during decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub total: Option<u64>,
    pub received: usize,
}

impl<T> ListPage<T> {
    pub fn new(rows: Vec<T>, total: Option<u64>) -> Self {
        let received = rows.len();
        Self {
            rows,
            total,
            received,
        }
    }

    /// Builds a page whose raw row count differs from the kept rows
    pub fn with_received(rows: Vec<T>, total: Option<u64>, received: usize) -> Self {
        Self {
            rows,
            total,
            received,
        }
    }

    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: None,
            received: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.received == 0
    }
}
