pub const MAX_PAGE_SIZE: i64 = 100;

pub struct Pagination {
    limit: i64,
    offset: Option<i64>,
}

impl Pagination {
    pub fn new(limit: i64, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    pub fn from_page(page: i64, size: i64) -> Self {
        let size = size.clamp(1, MAX_PAGE_SIZE);
        Self::new(size, Some((page.max(1) - 1).saturating_mul(size)))
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_page() {
        let p = Pagination::from_page(3, 10);
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn test_from_page_clamps() {
        let p = Pagination::from_page(0, 0);
        assert_eq!(p.limit(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_from_page_huge_values() {
        let p = Pagination::from_page(i64::MAX, 1000);
        assert_eq!(p.limit(), MAX_PAGE_SIZE);
        assert_eq!(p.offset(), i64::MAX);
        let p = Pagination::from_page(i64::MIN, i64::MIN);
        assert_eq!(p.limit(), 1);
        assert_eq!(p.offset(), 0);
    }
}
