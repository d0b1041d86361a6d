//! Command handlers for the CLI.
//!
//! Each handler receives an already-loaded repository. Formatting is kept in
//! pure functions so the table layout can be tested without a terminal.

use std::fmt::Write as _;

use templefinder_core::{AppConfig, FacilityRecord};
use templefinder_geocode::ZippopotamClient;
use templefinder_search::{
    sort_results, FacilityRepository, InMemoryFacilityRepository, LocationSearchService,
    SearchRequest, SearchResult, SortOrder,
};

/// Run a radius search and print the matches as a table.
///
/// # Errors
///
/// Returns an error if the request has no usable origin, the geocoder
/// cannot be built, or the search itself fails.
pub(crate) async fn run_search(
    config: &AppConfig,
    repository: InMemoryFacilityRepository,
    request: SearchRequest,
    sort: SortOrder,
) -> anyhow::Result<()> {
    let query = request.into_query(config.default_radius_miles)?;
    let geocoder = ZippopotamClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build geocoder client: {e}"))?;
    let service = LocationSearchService::new(repository, geocoder);

    let mut results = service.search(&query).await?;
    sort_results(&mut results, sort);

    if results.is_empty() {
        println!(
            "no temples within {} miles; try a larger --radius",
            query.radius_miles
        );
        return Ok(());
    }

    print!("{}", format_results(&results));
    Ok(())
}

/// Print every facility in repository order.
///
/// # Errors
///
/// Returns an error if the repository cannot be read.
pub(crate) fn run_list(repository: &impl FacilityRepository) -> anyhow::Result<()> {
    let facilities = repository.get_all()?;
    if facilities.is_empty() {
        println!("no temples loaded");
        return Ok(());
    }
    print!("{}", format_facilities(&facilities));
    Ok(())
}

/// Print one facility's full record.
///
/// # Errors
///
/// Returns an error if the id is unknown or the repository cannot be read.
pub(crate) fn run_show(repository: &impl FacilityRepository, id: i64) -> anyhow::Result<()> {
    let facility = repository
        .get_by_id(id)?
        .ok_or_else(|| anyhow::anyhow!("temple {id} not found; run `list` to see valid ids"))?;
    print!("{}", format_facility_detail(&facility));
    Ok(())
}

fn format_results(results: &[SearchResult]) -> String {
    let mut out = format!("{:<6}{:<10}{:<22}ADDRESS\n", "ID", "MILES", "CITY");
    for result in results {
        let _ = writeln!(
            out,
            "{:<6}{:<10.1}{:<22}{}",
            result.facility.id,
            result.distance_miles,
            result.facility.city,
            result.facility.address
        );
    }
    out
}

fn format_facilities(facilities: &[FacilityRecord]) -> String {
    let mut out = format!("{:<6}{:<22}ADDRESS\n", "ID", "CITY");
    for facility in facilities {
        let _ = writeln!(
            out,
            "{:<6}{:<22}{}",
            facility.id, facility.city, facility.address
        );
    }
    out
}

fn format_facility_detail(facility: &FacilityRecord) -> String {
    let dash = "-";
    let fields = [
        ("City", Some(facility.city.as_str())),
        ("Address", Some(facility.address.as_str())),
        ("Phone", facility.phone.as_deref()),
        ("Fax", facility.fax.as_deref()),
        ("Email", facility.email.as_deref()),
        ("Hours", facility.operating_hours.as_deref()),
        ("Days", facility.operating_days.as_deref()),
        ("Image", facility.image_url.as_deref()),
    ];

    let mut out = format!("Temple #{}\n", facility.id);
    for (label, value) in fields {
        let _ = writeln!(out, "{label:<9}{}", value.unwrap_or(dash));
    }
    out
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
