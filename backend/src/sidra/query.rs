//! SIDRA values API query builder.
//!
//! SIDRA encodes the whole query in the path:
//!
//! ```text
//! https://apisidra.ibge.gov.br/values/t/1737/n1/all/v/63,69/p/last%20472/h/y
//!                                     │      │  │   │       │             └ header row
//!                                     │      │  │   │       └ period window
//!                                     │      │  │   └ variable codes
//!                                     │      │  └ territorial code(s)
//!                                     │      └ territorial level
//!                                     └ table
//! ```

/// Public SIDRA values endpoint.
pub const DEFAULT_BASE_URL: &str = "https://apisidra.ibge.gov.br/values";

/// IPCA table (monthly index, variations and weights).
pub const IPCA_TABLE: &str = "1737";

/// Monthly, year-to-date, 3-, 6- and 12-month variations.
pub const IPCA_VARIABLES: [&str; 5] = ["63", "69", "2263", "2264", "2265"];

/// Number of monthly periods requested.
pub const IPCA_PERIOD: &str = "last 472";

/// Parameters of a SIDRA values request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidraQuery {
    /// Table code (`/t`).
    pub table: String,
    /// Territorial level, `1` is Brazil (`/n`).
    pub territorial_level: String,
    /// Territorial code(s), `all` for every unit at the level.
    pub territorial_code: String,
    /// Period window, e.g. `last 472` or `202401-202412` (`/p`).
    pub period: Option<String>,
    /// Variable codes (`/v`). Empty means the table default.
    pub variables: Vec<String>,
    /// Whether SIDRA prepends a label row (`/h/y`).
    pub header: bool,
}

impl SidraQuery {
    /// Query a table at the national level, all periods, with header.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            territorial_level: "1".to_string(),
            territorial_code: "all".to_string(),
            period: None,
            variables: Vec::new(),
            header: true,
        }
    }

    /// The fixed IPCA configuration served by `/ipca/mensal`.
    pub fn ipca_monthly() -> Self {
        Self::new(IPCA_TABLE)
            .with_period(IPCA_PERIOD)
            .with_variables(IPCA_VARIABLES)
    }

    pub fn with_territorial_level(mut self, level: impl Into<String>) -> Self {
        self.territorial_level = level.into();
        self
    }

    pub fn with_territorial_code(mut self, code: impl Into<String>) -> Self {
        self.territorial_code = code.into();
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = variables.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Render the path segment appended to the base URL.
    pub fn path(&self) -> String {
        let mut path = format!(
            "/t/{}/n{}/{}",
            self.table.trim(),
            self.territorial_level.trim(),
            self.territorial_code.trim()
        );

        let variables: Vec<&str> = self
            .variables
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect();
        if !variables.is_empty() {
            path.push_str("/v/");
            path.push_str(&variables.join(","));
        }

        if let Some(ref period) = self.period {
            path.push_str("/p/");
            path.push_str(&encode_segment(period.trim()));
        }

        path.push_str(if self.header { "/h/y" } else { "/h/n" });
        path
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Percent-encode the characters SIDRA period expressions may contain.
fn encode_segment(segment: &str) -> String {
    segment.replace('%', "%25").replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipca_monthly_path() {
        let query = SidraQuery::ipca_monthly();
        assert_eq!(
            query.path(),
            "/t/1737/n1/all/v/63,69,2263,2264,2265/p/last%20472/h/y"
        );
    }

    #[test]
    fn test_url_joins_base_with_trailing_slash() {
        let query = SidraQuery::new("1737");
        assert_eq!(
            query.url("https://apisidra.ibge.gov.br/values/"),
            "https://apisidra.ibge.gov.br/values/t/1737/n1/all/h/y"
        );
        assert_eq!(
            query.url(DEFAULT_BASE_URL),
            "https://apisidra.ibge.gov.br/values/t/1737/n1/all/h/y"
        );
    }

    #[test]
    fn test_variables_are_trimmed() {
        // Codes copied from a comma-and-space list
        let query = SidraQuery::new("1737")
            .with_variables("63, 69, 2263".split(','))
            .with_header(false);
        assert_eq!(query.path(), "/t/1737/n1/all/v/63,69,2263/h/n");
    }

    #[test]
    fn test_territorial_overrides() {
        let query = SidraQuery::new("7060")
            .with_territorial_level("6")
            .with_territorial_code("3550308")
            .with_period("202401-202412");
        assert_eq!(query.path(), "/t/7060/n6/3550308/p/202401-202412/h/y");
    }
}
