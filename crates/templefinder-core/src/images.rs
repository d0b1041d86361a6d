//! Photo lookup for facility cards, keyed by the dataset's city label.

/// City label to photo URL. Earlier entries win partial matches.
const CITY_IMAGES: &[(&str, &str)] = &[
    (
        "Albany, GA",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/863BAPS_ALBANY,_GA.jpg",
    ),
    (
        "Albany, NY",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/12albanymandirf.jpg",
    ),
    (
        "Allentown",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/1264Allentown.JPG",
    ),
    (
        "Atlanta",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/1301_Homepage%20Photo-f.jpg",
    ),
    (
        "Atlantic City",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/14atlantic-city.jpg",
    ),
    (
        "Augusta",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/16augusta1f.jpg",
    ),
    (
        "Austin",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/15austinmandirf.jpg",
    ),
    (
        "Beaumont",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/960BAPS%20MAndir%20Beaumont.jpg",
    ),
    (
        "Birmingham",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/17birmingham01f.jpg",
    ),
    (
        "Bloomington",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/1203BAPS%20Bloomington%20Mandir%20-f.jpg",
    ),
    (
        "Boston",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/18boston.jpg",
    ),
    (
        "Brandon",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/1474Brandon%20Mandir-f.jpg",
    ),
    (
        "Calgary",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/901Calgary.jpg",
    ),
    (
        "Calhoun",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/1210BAPS%20Calhoun%20mandir.jpg",
    ),
    (
        "Cambridge",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/1393BAPS%20Cambridge.jpg",
    ),
    (
        "Charlotte",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/19charlotte4f.jpg",
    ),
    (
        "Chattanooga",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/932BAPS%20Shri%20Swaminarayan%20Mandir%20Chattanooga.jpg",
    ),
    (
        "Cherry Hill",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/20cherry-hill.jpg",
    ),
    (
        "Chicago",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/21mandirss.jpg",
    ),
    (
        "Cincinnati",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/900cincinnati.jpg",
    ),
    (
        "Clear Lake",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/961Clearlake-f.jpg",
    ),
    (
        "Cleveland",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/22YJ0A2054.JPG",
    ),
    (
        "Clifton",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/25Clifton.jpg",
    ),
    (
        "Columbia, SC",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/-1Mandirf.jpg",
    ),
    (
        "Columbia, TN",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/99701Mandirf.jpg",
    ),
    (
        "Columbus",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/26Columbus_OH3__1_.JPG",
    ),
    (
        "Corpus Christi",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/FullSizeImages/27IMG_1186.JPG",
    ),
    (
        "Crystal Lake",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/1389crystallake.jpg",
    ),
    (
        "Dallas",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/28dallasf.jpg",
    ),
    (
        "Dayton",
        "https://www.baps.org/Data/Sites/1/Media/LocationImages/29daytonmandirf.jpg",
    ),
];

/// Photo URL for a facility city label.
///
/// An exact case-insensitive match is preferred; otherwise the first entry
/// whose label contains `city`, or is contained in it, is used.
#[must_use]
pub fn image_url_for_city(city: &str) -> Option<&'static str> {
    let needle = city.to_lowercase();

    let exact = CITY_IMAGES
        .iter()
        .find(|(label, _)| label.to_lowercase() == needle);

    exact
        .or_else(|| {
            CITY_IMAGES.iter().find(|(label, _)| {
                let label = label.to_lowercase();
                label.contains(&needle) || needle.contains(&label)
            })
        })
        .map(|(_, url)| *url)
}
