//! Cursor pagination from the `Link` response header.
//!
//! Shopify paginates list endpoints with an opaque `page_info` cursor. The
//! cursors for the neighbouring pages come back in a header like:
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2024-10/products.json?page_info=abc&limit=50>; rel="previous",
//!       <https://shop.myshopify.com/admin/api/2024-10/products.json?page_info=def&limit=50>; rel="next"
//! ```
//!
//! [`Pagination::from_link_header`] turns that into a [`Pagination`] holding
//! the [`PageOptions`] for each direction.

use std::sync::OnceLock;

use regex::Regex;

use crate::clients::errors::ResponseDecodingError;

fn link_entry_regex() -> &'static Regex {
    static LINK_ENTRY: OnceLock<Regex> = OnceLock::new();
    LINK_ENTRY.get_or_init(|| {
        Regex::new(r#"^ *<([^>]+)>; rel="(previous|next)" *$"#).expect("Invalid regex")
    })
}

/// Query options that fetch one neighbouring page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// The `page_info` cursor.
    pub page_info: String,
    /// The page size the cursor was issued with, when present.
    pub limit: Option<u32>,
}

/// Cursors for the pages on either side of a list response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Options for the next page.
    pub next: Option<PageOptions>,
    /// Options for the previous page.
    pub previous: Option<PageOptions>,
}

impl Pagination {
    /// Parses a `Link` header value.
    ///
    /// An empty value yields an empty `Pagination`. Each comma separated
    /// entry must have the form `<url>; rel="next"` or `<url>; rel="previous"`
    /// and its URL must carry a `page_info` parameter. A repeated direction
    /// keeps the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodingError`] for a malformed entry, an invalid
    /// URL, a missing `page_info`, or a `limit` that is not an unsigned
    /// integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::Pagination;
    ///
    /// let header = r#"<https://s.myshopify.com/admin/products.json?page_info=abc&limit=10>; rel="next""#;
    /// let pagination = Pagination::from_link_header(header).unwrap();
    ///
    /// let next = pagination.next.unwrap();
    /// assert_eq!(next.page_info, "abc");
    /// assert_eq!(next.limit, Some(10));
    /// assert!(pagination.previous.is_none());
    ///
    /// assert!(Pagination::from_link_header("").unwrap().is_empty());
    /// assert!(Pagination::from_link_header("garbage").is_err());
    /// ```
    pub fn from_link_header(header: &str) -> Result<Self, ResponseDecodingError> {
        let mut pagination = Self::default();

        if header.is_empty() {
            return Ok(pagination);
        }

        for entry in header.split(',') {
            let captures = link_entry_regex().captures(entry).ok_or_else(|| {
                ResponseDecodingError::new("could not extract pagination link header")
            })?;

            let options = page_options_from_url(&captures[1])?;
            if &captures[2] == "next" {
                pagination.next = Some(options);
            } else {
                pagination.previous = Some(options);
            }
        }

        Ok(pagination)
    }

    /// Returns `true` when neither direction has a cursor.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.next.is_none() && self.previous.is_none()
    }

    /// Returns `true` when there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` when there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

fn page_options_from_url(raw: &str) -> Result<PageOptions, ResponseDecodingError> {
    let url = url::Url::parse(raw)
        .map_err(|_| ResponseDecodingError::new("pagination does not contain a valid URL"))?;

    let mut page_info = None;
    let mut limit = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "page_info" => page_info = Some(value.into_owned()),
            "limit" => limit = Some(value.into_owned()),
            _ => {}
        }
    }

    let page_info = page_info
        .filter(|info| !info.is_empty())
        .ok_or_else(|| ResponseDecodingError::new("page_info is missing"))?;

    let limit = match limit.filter(|l| !l.is_empty()) {
        Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
            ResponseDecodingError::new(format!("pagination limit '{raw}' is not a valid number"))
        })?),
        None => None,
    };

    Ok(PageOptions { page_info, limit })
}
