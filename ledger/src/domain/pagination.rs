use crate::domain::validation::Validator;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

#[derive(Debug, Error)]
#[error("{name} query {value:?} is invalid: {source}")]
pub struct InvalidPageQuery {
    pub name: &'static str,
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn parse_param(name: &'static str, value: Option<&str>) -> Result<Option<i64>, InvalidPageQuery> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|source| InvalidPageQuery {
                name,
                value: value.to_string(),
                source,
            }),
    }
}

impl PageRequest {
    /// Parses the raw `page` and `per_page` query values. Missing or empty values take the defaults.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> anyhow::Result<Self> {
        let page = parse_param("page", page)?;
        let per_page = parse_param("per_page", per_page)?;

        let mut v = Validator::new();
        v.field("Page").gte(page, 1);
        v.field("PerPage").gte(per_page, 1);
        v.finish()?;

        Ok(PageRequest {
            page: page.map_or(DEFAULT_PAGE, |p| p as u64),
            per_page: per_page.map_or(DEFAULT_PER_PAGE, |p| p as u64),
        })
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

pub fn total_pages(total_rows: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_rows.div_ceil(per_page)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub per_page: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total_rows: i64) -> Self {
        let total_rows = u64::try_from(total_rows).unwrap_or_default();
        Pagination {
            current_page: request.page,
            total_pages: total_pages(total_rows, request.per_page),
            per_page: request.per_page,
        }
    }
}
