use js_sys::Date;

/// Local calendar year from the browser clock
pub fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

pub fn copyright_line(year: u32) -> String {
    format!("© {} CommodityHub. All rights reserved.", year)
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_mentions_year_and_brand() {
        assert_eq!(copyright_line(2026), "© 2026 CommodityHub. All rights reserved.");
    }
}
