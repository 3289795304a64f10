use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

// main struct for modelling a bank account held in the ledger
#[derive(Debug, Clone)]
pub struct Account {
    // shared-secret credential, compared for exact equality
    pub pin: u32,
    pub balance: Decimal,
}

// name + balance pair as observed at the end of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    pub sender: AccountBalance,
    pub recipient: AccountBalance,
}

// The account set is fixed at process start; there is no signup or
// account-deletion operation, and everything resets on restart.
pub fn seed_accounts() -> HashMap<String, Account> {
    HashMap::from([
        (
            "fatima".to_owned(),
            Account {
                pin: 1234,
                balance: dec!(2000),
            },
        ),
        (
            "ali".to_owned(),
            Account {
                pin: 1111,
                balance: dec!(24788),
            },
        ),
        (
            "moin".to_owned(),
            Account {
                pin: 2222,
                balance: dec!(109876),
            },
        ),
    ])
}
