/// One upstream publisher the scraping service knows how to crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    /// Identifier sent to the service (`/scrape`, `/documents/filter`, ...).
    pub id: &'static str,
    pub display_name: &'static str,
    /// Domain the service stamps into each stored document's `website` field.
    pub website: &'static str,
}

/// Sources offered for selection, in display order.
pub const SOURCE_CATALOG: &[SourceInfo] = &[
    SourceInfo {
        id: "RBI",
        display_name: "Reserve Bank of India",
        website: "rbi.org.in",
    },
    SourceInfo {
        id: "Income Tax",
        display_name: "Income Tax Department",
        website: "incometaxindia.gov.in",
    },
    SourceInfo {
        id: "GST Council",
        display_name: "GST Council",
        website: "gstcouncil.gov.in",
    },
];

/// Exact lookup by service identifier.
pub fn find_source(id: &str) -> Option<&'static SourceInfo> {
    SOURCE_CATALOG.iter().find(|source| source.id == id)
}

/// Lenient lookup for user input: matches id, display name or website,
/// ignoring ASCII case and surrounding whitespace.
pub fn resolve_source(input: &str) -> Option<&'static SourceInfo> {
    let needle = input.trim();
    if needle.is_empty() {
        return None;
    }
    SOURCE_CATALOG.iter().find(|source| {
        source.id.eq_ignore_ascii_case(needle)
            || source.display_name.eq_ignore_ascii_case(needle)
            || source.website.eq_ignore_ascii_case(needle)
    })
}

pub fn source_for_website(website: &str) -> Option<&'static SourceInfo> {
    SOURCE_CATALOG
        .iter()
        .find(|source| source.website.eq_ignore_ascii_case(website.trim()))
}
