#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

/// Resolves the dual pagination styles the candidates listing endpoint
/// accepts: `page`/`page_size` takes precedence over `limit`/`offset` when
/// both are supplied.
pub fn resolve_pagination(
    page: Option<i64>,
    page_size: Option<i64>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Pagination {
    if let (Some(page), Some(page_size)) = (page, page_size) {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_LIMIT);
        return Pagination { limit: page_size, offset: (page - 1) * page_size };
    }

    Pagination {
        limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        offset: offset.unwrap_or(0).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_style_takes_precedence() {
        let p = resolve_pagination(Some(2), Some(10), Some(999), Some(999));
        assert_eq!(p, Pagination { limit: 10, offset: 10 });
    }

    #[test]
    fn falls_back_to_limit_offset() {
        let p = resolve_pagination(None, None, Some(5), Some(15));
        assert_eq!(p, Pagination { limit: 5, offset: 15 });
    }

    #[test]
    fn applies_defaults_when_nothing_supplied() {
        let p = resolve_pagination(None, None, None, None);
        assert_eq!(p, Pagination { limit: DEFAULT_LIMIT, offset: 0 });
    }
}
