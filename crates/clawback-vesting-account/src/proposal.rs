//! The governance clawback proposal.
//!
//! Only the basic field validation lives here; executing an accepted proposal is
//! [`crate::execute_clawback`] with the proposal's target and destination.

use primitives_address::{AccountAddress, ParseAddressError};
use serde::{Deserialize, Serialize};

/// The router key of the proposal.
pub const PROPOSAL_ROUTE: &str = "clawbackvesting";

/// The type of the proposal.
pub const PROPOSAL_TYPE: &str = "Clawback";

/// The max length of the proposal title.
pub const MAX_TITLE_LENGTH: usize = 140;

/// The max length of the proposal description.
pub const MAX_DESCRIPTION_LENGTH: usize = 10000;

/// A governance proposal to claw back the unvested coins of an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClawbackProposal {
    /// The proposal title.
    pub title: String,
    /// The proposal description.
    pub description: String,
    /// The address of the clawback vesting account.
    pub address: String,
    /// Where to send the clawed back coins; empty means the funder.
    #[serde(default)]
    pub destination_address: String,
}

/// An error in the proposal fields.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ProposalError {
    /// The title is blank.
    #[error("proposal title cannot be blank")]
    BlankTitle,
    /// The title is too long.
    #[error("proposal title is longer than max length of {MAX_TITLE_LENGTH}")]
    TitleTooLong,
    /// The description is blank.
    #[error("proposal description cannot be blank")]
    BlankDescription,
    /// The description is too long.
    #[error("proposal description is longer than max length of {MAX_DESCRIPTION_LENGTH}")]
    DescriptionTooLong,
    /// The target address is invalid.
    #[error("invalid account address: {0}")]
    InvalidAddress(#[source] ParseAddressError),
    /// The destination address is invalid.
    #[error("invalid destination address: {0}")]
    InvalidDestinationAddress(#[source] ParseAddressError),
}

impl ClawbackProposal {
    /// Create a new proposal.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
        destination_address: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            address: address.into(),
            destination_address: destination_address.into(),
        }
    }

    /// The router key of the proposal.
    pub fn proposal_route(&self) -> &'static str {
        PROPOSAL_ROUTE
    }

    /// The type of the proposal.
    pub fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE
    }

    /// The parsed target address.
    pub fn target(&self) -> Result<AccountAddress, ProposalError> {
        self.address.parse().map_err(ProposalError::InvalidAddress)
    }

    /// The parsed destination address, `None` if not given.
    pub fn destination(&self) -> Result<Option<AccountAddress>, ProposalError> {
        if self.destination_address.is_empty() {
            return Ok(None);
        }
        self.destination_address
            .parse()
            .map(Some)
            .map_err(ProposalError::InvalidDestinationAddress)
    }

    /// Run the stateless checks of the proposal fields.
    pub fn validate_basic(&self) -> Result<(), ProposalError> {
        if self.title.trim().is_empty() {
            return Err(ProposalError::BlankTitle);
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ProposalError::TitleTooLong);
        }
        if self.description.trim().is_empty() {
            return Err(ProposalError::BlankDescription);
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ProposalError::DescriptionTooLong);
        }

        self.target()?;
        self.destination()?;

        Ok(())
    }
}
