use crate::models::AirportInfo;

/// Supported origin airports: (IATA code, city, airport name)
pub const ORIGIN_AIRPORTS: &[(&str, &str, &str)] = &[
    ("DEL", "New Delhi", "Indira Gandhi International Airport"),
    ("BOM", "Mumbai", "Chhatrapati Shivaji Maharaj International Airport"),
    ("BLR", "Bangalore", "Kempegowda International Airport"),
    ("HYD", "Hyderabad", "Rajiv Gandhi International Airport"),
    ("MAA", "Chennai", "Chennai International Airport"),
    ("CCU", "Kolkata", "Netaji Subhas Chandra Bose International Airport"),
    ("COK", "Kochi", "Cochin International Airport"),
    ("AMD", "Ahmedabad", "Sardar Vallabhbhai Patel International Airport"),
    ("PNQ", "Pune", "Pune Airport"),
    ("GOI", "Goa", "Goa International Airport"),
    ("TRV", "Thiruvananthapuram", "Trivandrum International Airport"),
    ("IXC", "Chandigarh", "Chandigarh Airport"),
];

/// Well-known destinations scanned by the fallback extractor:
/// (IATA code, display name). Scan order is fixed and the first
/// match wins, so broader names come after more specific ones.
pub const POPULAR_DESTINATIONS: &[(&str, &str)] = &[
    // Europe
    ("LHR", "London Heathrow"),
    ("CDG", "Paris Charles de Gaulle"),
    ("FRA", "Frankfurt"),
    ("AMS", "Amsterdam"),
    ("ZRH", "Zurich"),
    ("VIE", "Vienna"),
    ("FCO", "Rome"),
    ("BCN", "Barcelona"),
    ("MAD", "Madrid"),
    ("MUC", "Munich"),
    ("IST", "Istanbul"),
    // Asia and the Middle East
    ("DXB", "Dubai"),
    ("SIN", "Singapore"),
    ("HKG", "Hong Kong"),
    ("BKK", "Bangkok"),
    ("KUL", "Kuala Lumpur"),
    ("NRT", "Tokyo Narita"),
    ("ICN", "Seoul Incheon"),
    ("PEK", "Beijing"),
    ("PVG", "Shanghai Pudong"),
    ("DOH", "Doha"),
    ("AUH", "Abu Dhabi"),
    // North America
    ("JFK", "New York JFK"),
    ("LAX", "Los Angeles"),
    ("SFO", "San Francisco"),
    ("ORD", "Chicago"),
    ("YYZ", "Toronto"),
    ("YVR", "Vancouver"),
    ("MEX", "Mexico City"),
    // Oceania
    ("SYD", "Sydney"),
    ("MEL", "Melbourne"),
    ("AKL", "Auckland"),
    // Africa
    ("JNB", "Johannesburg"),
    ("CAI", "Cairo"),
    ("NBO", "Nairobi"),
    // Gulf and nearby
    ("RUH", "Riyadh"),
    ("JED", "Jeddah"),
    ("MCT", "Muscat"),
    ("BAH", "Bahrain"),
];

/// Origin airports as API objects, sorted by city name.
pub fn origin_airports() -> Vec<AirportInfo> {
    let mut airports: Vec<AirportInfo> = ORIGIN_AIRPORTS
        .iter()
        .map(|(iata, city, name)| AirportInfo {
            iata: (*iata).to_string(),
            city: (*city).to_string(),
            name: (*name).to_string(),
            country: "India".to_string(),
        })
        .collect();
    airports.sort_by(|a, b| a.city.cmp(&b.city));
    airports
}

/// City served by a supported origin airport, if the code is known.
pub fn origin_city(iata: &str) -> Option<&'static str> {
    ORIGIN_AIRPORTS
        .iter()
        .find(|(code, _, _)| *code == iata)
        .map(|(_, city, _)| *city)
}
