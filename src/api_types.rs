use crate::storage;
use crate::types::account::{AccountBalance, TransferOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// can be adjusted to compile with various DB backend support
pub type AppLedger = storage::SharedInmemoryLedger;

#[derive(Clone)]
pub struct AppState {
    pub ledger: AppLedger,
}

impl AppState {
    pub fn new(ledger: AppLedger) -> AppState {
        AppState { ledger }
    }
}

#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub name: String,
    pub pin_number: u32,
}

#[derive(Deserialize)]
pub struct DepositRequest {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Deserialize)]
pub struct TransferRequest {
    pub sender_name: String,
    pub send_pin: u32,
    pub recipient_name: String,
    pub amount: Decimal,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub name: String,
    pub bank_balance: Decimal,
}

impl From<AccountBalance> for BalanceResponse {
    fn from(account: AccountBalance) -> BalanceResponse {
        BalanceResponse {
            name: account.name,
            bank_balance: account.balance,
        }
    }
}

#[derive(Serialize)]
pub struct PartyBalance {
    pub name: String,
    pub updated_balance: Decimal,
}

impl From<AccountBalance> for PartyBalance {
    fn from(account: AccountBalance) -> PartyBalance {
        PartyBalance {
            name: account.name,
            updated_balance: account.balance,
        }
    }
}

#[derive(Serialize)]
pub struct TransferResponse {
    pub message: String,
    pub sender: PartyBalance,
    pub recipient: PartyBalance,
}

impl From<TransferOutcome> for TransferResponse {
    fn from(outcome: TransferOutcome) -> TransferResponse {
        TransferResponse {
            message: "Transfer successful".to_owned(),
            sender: outcome.sender.into(),
            recipient: outcome.recipient.into(),
        }
    }
}
