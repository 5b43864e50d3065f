use crate::dropdown_input::DropdownItem;

/// Country catalog for the fuzzy picker, in display order.
pub fn countries() -> Vec<String> {
    [
        "Afghanistan",
        "Albania",
        "Algeria",
        "Argentina",
        "Armenia",
        "Australia",
        "Austria",
        "Azerbaijan",
        "Bangladesh",
        "Belarus",
        "Belgium",
        "Bolivia",
        "Bosnia and Herzegovina",
        "Botswana",
        "Brazil",
        "Bulgaria",
        "Cambodia",
        "Cameroon",
        "Canada",
        "Chad",
        "Chile",
        "China",
        "Colombia",
        "Costa Rica",
        "Croatia",
        "Cuba",
        "Cyprus",
        "Czech Republic",
        "Denmark",
        "Dominican Republic",
        "Ecuador",
        "Egypt",
        "El Salvador",
        "Estonia",
        "Ethiopia",
        "Finland",
        "France",
        "Georgia",
        "Germany",
        "Ghana",
        "Greece",
        "Guatemala",
        "Haiti",
        "Honduras",
        "Hungary",
        "Iceland",
        "India",
        "Indonesia",
        "Iran",
        "Iraq",
        "Ireland",
        "Israel",
        "Italy",
        "Jamaica",
        "Japan",
        "Jordan",
        "Kazakhstan",
        "Kenya",
        "Kuwait",
        "Latvia",
        "Lebanon",
        "Libya",
        "Lithuania",
        "Luxembourg",
        "Madagascar",
        "Malaysia",
        "Mali",
        "Malta",
        "Mexico",
        "Moldova",
        "Mongolia",
        "Montenegro",
        "Morocco",
        "Mozambique",
        "Myanmar",
        "Namibia",
        "Nepal",
        "Netherlands",
        "New Zealand",
        "Nicaragua",
        "Niger",
        "Nigeria",
        "North Macedonia",
        "Norway",
        "Oman",
        "Pakistan",
        "Panama",
        "Paraguay",
        "Peru",
        "Philippines",
        "Poland",
        "Portugal",
        "Qatar",
        "Romania",
        "Rwanda",
        "Saudi Arabia",
        "Senegal",
        "Serbia",
        "Singapore",
        "Slovakia",
        "Slovenia",
        "Somalia",
        "South Africa",
        "South Korea",
        "Spain",
        "Sri Lanka",
        "Sudan",
        "Sweden",
        "Switzerland",
        "Syria",
        "Tanzania",
        "Thailand",
        "Tunisia",
        "Turkey",
        "Uganda",
        "Ukraine",
        "United Arab Emirates",
        "United Kingdom",
        "United States",
        "Uruguay",
        "Uzbekistan",
        "Venezuela",
        "Vietnam",
        "Yemen",
        "Zambia",
        "Zimbabwe",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn snoop_albums() -> Vec<DropdownItem> {
    vec![
        DropdownItem::new("Doggystyle", "1993"),
        DropdownItem::new("Tha Doggfather", "1996"),
        DropdownItem::new("Da Game Is to Be Sold, Not to Be Told", "1998"),
        DropdownItem::new("No Limit Top Dogg", "1999"),
        DropdownItem::new("Tha Last Meal", "2000"),
    ]
}

pub fn rappers() -> Vec<String> {
    ["Snoop Dogg", "Killer Mike", "Ice Cube", "Busta Rhymes", "Queen Latifah"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn jobs() -> Vec<String> {
    ["rapper", "sales", "distribution"]
        .into_iter()
        .map(String::from)
        .collect()
}
