use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// A page index and page size, sent as `skip`/`limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// The backend rejects page sizes above this.
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            limit: Self::MAX_LIMIT,
        }
    }
}

impl Serialize for PageRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("PageRequest", 2)?;
        s.serialize_field("skip", &self.offset())?;
        s.serialize_field("limit", &self.limit)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_limit() {
        for (page, limit) in [(0, 10), (1, 10), (3, 25), (7, 100)] {
            assert_eq!(
                PageRequest::new(page, limit).offset(),
                u64::from(page * limit)
            );
        }
    }

    #[test]
    fn offset_does_not_overflow() {
        let req = PageRequest::new(u32::MAX, 100);
        assert_eq!(req.offset(), u64::from(u32::MAX) * 100);
    }

    #[test]
    fn serializes_as_skip_and_limit() {
        let v = serde_json::to_value(PageRequest::new(1, 10)).unwrap();
        assert_eq!(v, serde_json::json!({"skip": 10, "limit": 10}));
    }

    #[test]
    fn decodes_list_wrapper() {
        let page: Page<serde_json::Value> =
            serde_json::from_str(r#"{"items": [{"a": 1}], "total": 42}"#).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.items.len(), 1);
    }
}
