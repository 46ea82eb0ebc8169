//! System prompts for the two extraction pipelines. Both demand a bare
//! JSON object; the parser still tolerates prose around it.

const DURATION_PROMPT: &str = "You are a short and strict extractor. The user has a trip request in plain English \
and an origin provided separately. Your job: infer the trip DURATION (in days) the user intends.\n\n\
RETURN ONLY a JSON object and NOTHING ELSE. The JSON must contain a single key:\n\
  \"duration_days\": <integer number of days>\n\
If you cannot determine it with confidence, still return a reasonable integer or the string 'UNKNOWN' for duration_days.\n\n\
Examples:\n\
Input: \"plan trip to swiss for 7 days\" => {\"duration_days\":7}\n\
Input: \"trip for a week\" => {\"duration_days\":7}\n\
Input: \"weekend in paris\" => {\"duration_days\":2}\n\
Do NOT include commentary, markdown, or extra fields. Return valid JSON only.";

const DESTINATION_PROMPT: &str = "You are an expert travel assistant that extracts destination information from natural language queries.\n\n\
Your task: Extract the DESTINATION city/country/airport from the user's trip query and return its IATA airport code.\n\n\
RETURN ONLY a JSON object with these fields:\n\
{\n\
  \"destination_city\": \"<city or country name>\",\n\
  \"iata_code\": \"<3-letter IATA code>\",\n\
  \"confidence\": \"<high|medium|low>\"\n\
}\n\n\
Examples:\n\
Input: \"plan trip to swiss for 7 days\" => {\"destination_city\": \"Zurich\", \"iata_code\": \"ZRH\", \"confidence\": \"high\"}\n\
Input: \"weekend in paris\" => {\"destination_city\": \"Paris\", \"iata_code\": \"CDG\", \"confidence\": \"high\"}\n\
Input: \"vacation in Dubai\" => {\"destination_city\": \"Dubai\", \"iata_code\": \"DXB\", \"confidence\": \"high\"}\n\
Input: \"trip to Thailand\" => {\"destination_city\": \"Bangkok\", \"iata_code\": \"BKK\", \"confidence\": \"medium\"}\n\
Input: \"visiting London\" => {\"destination_city\": \"London\", \"iata_code\": \"LHR\", \"confidence\": \"high\"}\n\n\
Rules:\n\
- For countries, use the main/capital airport\n\
- For Switzerland: ZRH (Zurich)\n\
- For Thailand: BKK (Bangkok)\n\
- For UK/England: LHR (London)\n\
- For Japan: NRT (Tokyo)\n\
- Always return valid 3-letter IATA codes\n\
- If unsure, set confidence to \"medium\" or \"low\"\n\n\
Return ONLY valid JSON, no markdown, no commentary.";

/// Duration prompt, with the origin appended as context when known.
pub fn duration_system_prompt(origin: Option<&str>) -> String {
    match origin {
        Some(origin) if !origin.is_empty() => format!("{DURATION_PROMPT}\nOrigin: {origin}"),
        _ => DURATION_PROMPT.to_string(),
    }
}

pub fn destination_system_prompt() -> &'static str {
    DESTINATION_PROMPT
}

pub fn user_prompt(query: &str) -> String {
    format!("User query: {query}")
}
