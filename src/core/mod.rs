// Core extraction exports
pub mod airlines;
pub mod airports;
pub mod dates;
pub mod destination;
pub mod duration;
pub mod parser;
pub mod prompts;

pub use airlines::{aircraft_name, airline_name, airline_website};
pub use airports::{origin_airports, origin_city, ORIGIN_AIRPORTS, POPULAR_DESTINATIONS};
pub use dates::{trip_dates, DEPARTURE_LEAD_DAYS};
pub use destination::{extract_destination, FallbackDestination};
pub use duration::{extract_duration_days, words_to_number};
pub use parser::{extract_json_block, parse_duration_response, parse_location_response, ExtractError, LocationParse};
