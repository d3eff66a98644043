use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // e.g. "20/5" or "20\5a" directly after a house number
    static ref HOUSE_NUMBER_SUFFIX_REGEX: Regex = Regex::new(r"(\d+)[\\/]\w+").unwrap();
}

const SEGMENT_SEPARATOR: char = ',';

fn strip_house_number_suffix(street: &str) -> String {
    HOUSE_NUMBER_SUFFIX_REGEX
        .replace_all(street, "${1}")
        .trim()
        .to_string()
}

/// Normalize a free-text address for geocoding.
///
/// Unit or apartment notation after the house number of the street
/// segment (everything before the first comma) is removed.
/// The remaining segments are kept as they are.
pub fn clean_address(address: Option<&str>) -> Option<String> {
    address.map(|address| {
        if address.is_empty() {
            return address.to_string();
        }
        let (street, rest) = address
            .split_once(SEGMENT_SEPARATOR)
            .unwrap_or((address, ""));
        let street = strip_house_number_suffix(street);
        let rest = rest.trim();
        if rest.is_empty() {
            street
        } else {
            format!("{street}, {rest}")
        }
    })
}
