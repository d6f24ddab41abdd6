//! Key assembly from already generated segments.

/// `site-serial`
pub fn assemble_ten_digit_key(site: &str, serial: &str) -> String {
    format!("{}-{}", site, serial)
}

/// `dateyear-OEM-0serial-filler`. The leading zero of the serial is added
/// here; `serial` carries only its six random digits.
pub fn assemble_structured_key(date_year: &str, serial: &str, filler: &str) -> String {
    format!("{}-OEM-0{}-{}", date_year, serial, filler)
}
