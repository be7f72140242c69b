//! Full font catalog fetch.

use fontswap_fonts::{FontError, FontFamilyGroup, FontSource, group_by_family};

/// Every font the source offers, grouped by family: the same shape the
/// inventory scanner reports, but unfiltered by document usage.
///
/// The single suspension point is the enumerate call; its failure
/// propagates to the caller unchanged.
pub async fn fetch_catalog<F: FontSource>(fonts: &F) -> Result<Vec<FontFamilyGroup>, FontError> {
    let available = fonts.available_fonts().await?;
    Ok(group_by_family(available))
}
