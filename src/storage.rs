use crate::types::account::{Account, AccountBalance, TransferOutcome};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    // unknown name and wrong PIN collapse into this one outcome
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Recipient not found")]
    RecipientNotFound,
    #[error("Insufficient balance")]
    InsufficientBalance,
}

pub trait Ledger {
    async fn authenticate(&self, name: &str, pin: u32) -> Result<AccountBalance, LedgerError>;

    async fn deposit(&mut self, name: &str, amount: Decimal)
        -> Result<AccountBalance, LedgerError>;

    async fn transfer(
        &mut self,
        sender_name: &str,
        pin: u32,
        recipient_name: &str,
        amount: Decimal,
    ) -> Result<TransferOutcome, LedgerError>;
}

// implementations

pub struct InmemoryLedger {
    accounts: HashMap<String, Account>,
}

impl InmemoryLedger {
    pub fn new(accounts: HashMap<String, Account>) -> InmemoryLedger {
        InmemoryLedger { accounts }
    }
}

impl Ledger for InmemoryLedger {
    async fn authenticate(&self, name: &str, pin: u32) -> Result<AccountBalance, LedgerError> {
        self.accounts
            .get(name)
            .filter(|account| account.pin == pin)
            .map(|account| AccountBalance {
                name: name.to_owned(),
                balance: account.balance,
            })
            .ok_or(LedgerError::InvalidCredentials)
    }

    async fn deposit(
        &mut self,
        name: &str,
        amount: Decimal,
    ) -> Result<AccountBalance, LedgerError> {
        let account = self
            .accounts
            .get_mut(name)
            .ok_or(LedgerError::UserNotFound)?;
        // no floor check: a negative amount acts as a withdrawal
        account.balance += amount;
        Ok(AccountBalance {
            name: name.to_owned(),
            balance: account.balance,
        })
    }

    async fn transfer(
        &mut self,
        sender_name: &str,
        pin: u32,
        recipient_name: &str,
        amount: Decimal,
    ) -> Result<TransferOutcome, LedgerError> {
        let sender = self
            .accounts
            .get(sender_name)
            .ok_or(LedgerError::InvalidCredentials)?;
        if sender.pin != pin {
            return Err(LedgerError::InvalidCredentials);
        }
        if !self.accounts.contains_key(recipient_name) {
            return Err(LedgerError::RecipientNotFound);
        }
        if sender.balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let sender_balance = {
            let sender = self
                .accounts
                .get_mut(sender_name)
                .ok_or(LedgerError::InvalidCredentials)?;
            sender.balance -= amount;
            sender.balance
        };
        let recipient_balance = {
            let recipient = self
                .accounts
                .get_mut(recipient_name)
                .ok_or(LedgerError::RecipientNotFound)?;
            recipient.balance += amount;
            recipient.balance
        };

        Ok(TransferOutcome {
            sender: AccountBalance {
                name: sender_name.to_owned(),
                balance: sender_balance,
            },
            recipient: AccountBalance {
                name: recipient_name.to_owned(),
                balance: recipient_balance,
            },
        })
    }
}

#[derive(Clone)]
pub struct SharedInmemoryLedger {
    inner: Arc<RwLock<InmemoryLedger>>,
}

impl SharedInmemoryLedger {
    pub fn new(accounts: HashMap<String, Account>) -> SharedInmemoryLedger {
        SharedInmemoryLedger {
            inner: Arc::new(RwLock::new(InmemoryLedger::new(accounts))),
        }
    }
}

impl Ledger for SharedInmemoryLedger {
    async fn authenticate(&self, name: &str, pin: u32) -> Result<AccountBalance, LedgerError> {
        self.inner.read().await.authenticate(name, pin).await
    }

    async fn deposit(
        &mut self,
        name: &str,
        amount: Decimal,
    ) -> Result<AccountBalance, LedgerError> {
        self.inner.write().await.deposit(name, amount).await
    }

    // the write guard spans the balance check and both mutations, so
    // racing transfers against the same sender serialize here
    async fn transfer(
        &mut self,
        sender_name: &str,
        pin: u32,
        recipient_name: &str,
        amount: Decimal,
    ) -> Result<TransferOutcome, LedgerError> {
        self.inner
            .write()
            .await
            .transfer(sender_name, pin, recipient_name, amount)
            .await
    }
}
