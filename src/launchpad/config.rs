//! Configuration of a new launchpad set

use odra::prelude::*;
use super::errors::LaunchpadError;

/// Named-field arguments of `generate_launchpad_set`.
///
/// Optional fields default to "not set": no second URI template, minting
/// closed, and no auxiliary payout override.
#[odra::odra_type]
pub struct LaunchpadSetConfig {
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Primary content URI template
    pub base_uri: String,
    /// Optional second content URI template
    pub secondary_uri: Option<String>,
    /// Whether the sale opens with minting enabled
    pub mint_enabled: bool,
    /// Default receiver of proceeds
    pub beneficiary: Address,
    /// Receiver overriding the beneficiary
    pub auxiliary: Option<Address>,
}

impl LaunchpadSetConfig {
    pub fn new(name: &str, symbol: &str, base_uri: &str, beneficiary: Address) -> Self {
        Self {
            name: String::from(name),
            symbol: String::from(symbol),
            base_uri: String::from(base_uri),
            secondary_uri: None,
            mint_enabled: false,
            beneficiary,
            auxiliary: None,
        }
    }

    pub fn with_secondary_uri(mut self, uri: &str) -> Self {
        self.secondary_uri = Some(String::from(uri));
        self
    }

    pub fn with_mint_enabled(mut self, enabled: bool) -> Self {
        self.mint_enabled = enabled;
        self
    }

    pub fn with_auxiliary(mut self, auxiliary: Address) -> Self {
        self.auxiliary = Some(auxiliary);
        self
    }

    /// Reject an empty or whitespace-only name, symbol or content URI
    pub fn validate(&self) -> Result<(), LaunchpadError> {
        if is_blank(&self.name) || is_blank(&self.symbol) || is_blank(&self.base_uri) {
            return Err(LaunchpadError::InvalidArgument);
        }
        if let Some(uri) = &self.secondary_uri {
            if is_blank(uri) {
                return Err(LaunchpadError::InvalidArgument);
            }
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beneficiary() -> Address {
        odra_test::env().get_account(0)
    }

    #[test]
    fn test_valid_config() {
        let config = LaunchpadSetConfig::new(
            "TESTNFT",
            "TNFT",
            "https://nftcontents.wenft.space/ASDF2/",
            beneficiary(),
        );
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.mint_enabled);
        assert_eq!(config.auxiliary, None);
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let uri = "https://nftcontents.wenft.space/ASDF2/";

        let no_name = LaunchpadSetConfig::new("", "TNFT", uri, beneficiary());
        assert_eq!(no_name.validate(), Err(LaunchpadError::InvalidArgument));

        let no_symbol = LaunchpadSetConfig::new("TESTNFT", "  ", uri, beneficiary());
        assert_eq!(no_symbol.validate(), Err(LaunchpadError::InvalidArgument));

        let no_uri = LaunchpadSetConfig::new("TESTNFT", "TNFT", "", beneficiary());
        assert_eq!(no_uri.validate(), Err(LaunchpadError::InvalidArgument));
    }

    #[test]
    fn test_empty_secondary_uri_is_rejected() {
        let config = LaunchpadSetConfig::new(
            "TESTNFT",
            "TNFT",
            "https://nftcontents.wenft.space/ASDF2/",
            beneficiary(),
        )
        .with_secondary_uri("");
        assert_eq!(config.validate(), Err(LaunchpadError::InvalidArgument));
    }
}
