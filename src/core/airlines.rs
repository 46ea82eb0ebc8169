/// Carrier names by IATA airline code
const AIRLINE_NAMES: &[(&str, &str)] = &[
    // Indian carriers
    ("AI", "Air India"),
    ("UK", "Vistara"),
    ("6E", "IndiGo"),
    ("SG", "SpiceJet"),
    ("G8", "Go First"),
    ("I5", "AirAsia India"),
    ("9W", "Jet Airways"),
    // Middle East
    ("EK", "Emirates"),
    ("QR", "Qatar Airways"),
    ("EY", "Etihad Airways"),
    ("WY", "Oman Air"),
    ("GF", "Gulf Air"),
    // Asia
    ("UL", "SriLankan Airlines"),
    ("SQ", "Singapore Airlines"),
    ("TG", "Thai Airways"),
    ("CX", "Cathay Pacific"),
    ("MH", "Malaysia Airlines"),
    ("VJ", "VietJet Air"),
    ("BL", "Jetstar Pacific"),
    ("VN", "Vietnam Airlines"),
    ("TR", "Scoot"),
    ("3K", "Jetstar Asia"),
    ("AK", "AirAsia"),
    ("D7", "AirAsia X"),
    ("FD", "Thai AirAsia"),
    ("NH", "All Nippon Airways"),
    ("JL", "Japan Airlines"),
    ("OZ", "Asiana Airlines"),
    ("KE", "Korean Air"),
    // Europe
    ("BA", "British Airways"),
    ("LH", "Lufthansa"),
    ("AF", "Air France"),
    ("KL", "KLM"),
    ("EI", "Aer Lingus"),
    ("VS", "Virgin Atlantic"),
    ("IB", "Iberia"),
    ("AZ", "ITA Airways"),
    ("LX", "Swiss International"),
    ("OS", "Austrian Airlines"),
    ("SN", "Brussels Airlines"),
    // Americas
    ("AA", "American Airlines"),
    ("UA", "United Airlines"),
    ("DL", "Delta Air Lines"),
    ("AC", "Air Canada"),
    ("WS", "WestJet"),
    // Oceania
    ("QF", "Qantas"),
    ("VA", "Virgin Australia"),
    ("NZ", "Air New Zealand"),
    // Others
    ("HR", "Hahn Air"),
    ("LY", "El Al"),
    ("MS", "EgyptAir"),
    ("SA", "South African Airways"),
    ("ET", "Ethiopian Airlines"),
    ("KQ", "Kenya Airways"),
];

/// Booking sites for carriers that sell direct
const AIRLINE_WEBSITES: &[(&str, &str)] = &[
    ("AI", "https://www.airindia.com"),
    ("UK", "https://www.airvistara.com"),
    ("6E", "https://www.goindigo.in"),
    ("SG", "https://www.spicejet.com"),
    ("G8", "https://www.flygofirst.com"),
    ("I5", "https://www.airasia.com/en/gb"),
    ("EK", "https://www.emirates.com"),
    ("QR", "https://www.qatarairways.com"),
    ("EY", "https://www.etihad.com"),
    ("WY", "https://www.omanair.com"),
    ("GF", "https://www.gulfair.com"),
    ("UL", "https://www.srilankan.com"),
    ("SQ", "https://www.singaporeair.com"),
    ("TG", "https://www.thaiairways.com"),
    ("CX", "https://www.cathaypacific.com"),
    ("MH", "https://www.malaysiaairlines.com"),
    ("VJ", "https://www.vietjetair.com"),
    ("VN", "https://www.vietnamairlines.com"),
    ("TR", "https://www.flyscoot.com"),
    ("3K", "https://www.jetstar.com"),
    ("AK", "https://www.airasia.com"),
    ("NH", "https://www.ana.co.jp"),
    ("JL", "https://www.jal.co.jp"),
    ("KE", "https://www.koreanair.com"),
    ("BA", "https://www.britishairways.com"),
    ("LH", "https://www.lufthansa.com"),
    ("AF", "https://www.airfrance.com"),
    ("KL", "https://www.klm.com"),
    ("VS", "https://www.virginatlantic.com"),
    ("IB", "https://www.iberia.com"),
    ("LX", "https://www.swiss.com"),
    ("AA", "https://www.aa.com"),
    ("UA", "https://www.united.com"),
    ("DL", "https://www.delta.com"),
    ("AC", "https://www.aircanada.com"),
    ("QF", "https://www.qantas.com"),
    ("NZ", "https://www.airnewzealand.com"),
];

/// Aircraft type names by Amadeus equipment code
const AIRCRAFT_NAMES: &[(&str, &str)] = &[
    // Airbus A320 family
    ("318", "Airbus A318"),
    ("319", "Airbus A319"),
    ("320", "Airbus A320"),
    ("321", "Airbus A321"),
    ("32A", "Airbus A320 (Sharklets)"),
    ("32B", "Airbus A321 (Sharklets)"),
    ("32N", "Airbus A320neo"),
    ("32Q", "Airbus A321neo"),
    // Airbus A330 family
    ("330", "Airbus A330"),
    ("332", "Airbus A330-200"),
    ("333", "Airbus A330-300"),
    ("338", "Airbus A330-800neo"),
    ("339", "Airbus A330-900neo"),
    // Airbus A340 family
    ("342", "Airbus A340-200"),
    ("343", "Airbus A340-300"),
    ("345", "Airbus A340-500"),
    ("346", "Airbus A340-600"),
    // Airbus A350 family
    ("350", "Airbus A350"),
    ("351", "Airbus A350-1000"),
    ("359", "Airbus A350-900"),
    // Airbus A380
    ("388", "Airbus A380-800"),
    ("380", "Airbus A380"),
    // Boeing 737 family
    ("733", "Boeing 737-300"),
    ("734", "Boeing 737-400"),
    ("735", "Boeing 737-500"),
    ("736", "Boeing 737-600"),
    ("737", "Boeing 737-700"),
    ("738", "Boeing 737-800"),
    ("739", "Boeing 737-900"),
    ("73H", "Boeing 737-800"),
    ("73J", "Boeing 737-900"),
    ("7M8", "Boeing 737 MAX 8"),
    ("7M9", "Boeing 737 MAX 9"),
    // Boeing 747
    ("744", "Boeing 747-400"),
    ("747", "Boeing 747"),
    ("748", "Boeing 747-8"),
    // Boeing 757
    ("752", "Boeing 757-200"),
    ("753", "Boeing 757-300"),
    // Boeing 767
    ("762", "Boeing 767-200"),
    ("763", "Boeing 767-300"),
    ("764", "Boeing 767-400"),
    // Boeing 777 family
    ("772", "Boeing 777-200"),
    ("77L", "Boeing 777-200LR"),
    ("773", "Boeing 777-300"),
    ("77W", "Boeing 777-300ER"),
    ("777", "Boeing 777"),
    // Boeing 787 Dreamliner
    ("787", "Boeing 787"),
    ("788", "Boeing 787-8"),
    ("789", "Boeing 787-9"),
    ("78J", "Boeing 787-10"),
    // Regional jets
    ("E75", "Embraer E175"),
    ("E90", "Embraer E190"),
    ("E95", "Embraer E195"),
    ("CR9", "Bombardier CRJ-900"),
    ("CRJ", "Bombardier CRJ"),
    // Turboprops
    ("AT7", "ATR 72"),
    ("AT5", "ATR 42"),
    ("DH4", "Dash 8-400"),
];

/// Airline display name. Unknown carriers echo their code back.
pub fn airline_name(carrier_code: &str) -> &str {
    AIRLINE_NAMES
        .iter()
        .find(|(code, _)| *code == carrier_code)
        .map(|(_, name)| *name)
        .unwrap_or(carrier_code)
}

/// Direct booking site, if the carrier has one on record.
pub fn airline_website(carrier_code: &str) -> Option<&'static str> {
    AIRLINE_WEBSITES
        .iter()
        .find(|(code, _)| *code == carrier_code)
        .map(|(_, url)| *url)
}

/// Aircraft display name. Unknown codes echo back, empty codes read "N/A".
pub fn aircraft_name(aircraft_code: &str) -> &str {
    if aircraft_code.is_empty() {
        return "N/A";
    }
    AIRCRAFT_NAMES
        .iter()
        .find(|(code, _)| *code == aircraft_code)
        .map(|(_, name)| *name)
        .unwrap_or(aircraft_code)
}
