use crate::{
    entities::{Comparison, Quote, RideOffer},
    error::{empty_catalog_error, Error},
};

use super::jitter::{JitterSource, ETA_JITTER, PRICE_JITTER};

/// Jitters every offer once, sorts by price and picks the cheapest and fastest quotes.
///
/// Price ties keep catalog order. The fastest quote is taken from the unsorted quotes,
/// so eta ties also resolve to the earliest offer in the catalog. Offsets outside the
/// jitter ranges are clamped back into them.
#[tracing::instrument(skip_all, fields(offers = offers.len()))]
pub fn compare<S>(offers: &[RideOffer], source: &mut S) -> Result<Comparison, Error>
where
    S: JitterSource + ?Sized,
{
    if offers.is_empty() {
        return Err(empty_catalog_error());
    }

    let mut quotes: Vec<Quote> = offers
        .iter()
        .map(|offer| {
            let price_delta = source.price_delta().clamp(-PRICE_JITTER, PRICE_JITTER);
            let eta_delta = source.eta_delta().clamp(-ETA_JITTER, ETA_JITTER);

            Quote::new(offer.clone(), price_delta, eta_delta)
        })
        .collect();

    // min_by_key returns the first of several equal minimums
    let fastest = quotes
        .iter()
        .min_by_key(|quote| quote.eta)
        .ok_or_else(empty_catalog_error)?
        .clone();

    // sort_by_key is stable
    quotes.sort_by_key(|quote| quote.price);

    let cheapest = quotes.first().ok_or_else(empty_catalog_error)?.clone();

    Ok(Comparison::new(quotes, cheapest, fastest))
}
