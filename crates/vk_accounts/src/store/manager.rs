//! The account store itself.

use vk_core::{err, info, IntoJsonError};

use super::{
    backend::{FileBackend, StorageBackend, StoreError},
    errors::{AccountError, Result},
    keys,
    password,
    types::{Account, RegisterRequest, Session},
};
use crate::validation;

/// Durable mapping from email to [`Account`], plus the single
/// current-session slot and the remember flag.
///
/// The backend is the sole source of truth: nothing is cached between
/// calls, so every operation reads the persisted state fresh.
pub struct AccountStore {
    backend: Box<dyn StorageBackend>,
}

impl AccountStore {
    /// Open the store over the on-disk vault in the default location.
    ///
    /// # Errors
    /// - if the vault directory can't be resolved or created
    pub fn open() -> Result<Self> {
        let dir = vk_core::get_vault_dir().map_err(StoreError::from)?;
        Ok(Self::with_backend(Box::new(FileBackend::new(dir))))
    }

    /// Open the store over a caller-supplied backend
    /// (e.g. [`MemoryBackend`](super::MemoryBackend) in tests).
    #[must_use]
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Read a raw slot, treating backend read failures as absent.
    fn read_key(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(error) => {
                err!("Failed to read {key} from the vault: {error}");
                None
            }
        }
    }

    /// All registered accounts, in registration order.
    ///
    /// A missing or malformed collection reads as empty, never as an
    /// error; a malformed one is quarantined so the next read is clean.
    #[must_use]
    pub fn list_accounts(&self) -> Vec<Account> {
        let Some(text) = self.read_key(keys::USERS) else {
            return Vec::new();
        };
        match serde_json::from_str(&text) {
            Ok(accounts) => accounts,
            Err(error) => {
                err!("Invalid account collection in the vault! This may be a sign of corruption.\nError: {error}");
                self.backend.quarantine(keys::USERS);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted account collection.
    pub fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        let text = serde_json::to_string(accounts).json_to()?;
        self.backend.set(keys::USERS, &text)?;
        Ok(())
    }

    /// The current session, or `None` while anonymous.
    ///
    /// Malformed session data reads as anonymous and is quarantined.
    #[must_use]
    pub fn get_session(&self) -> Option<Session> {
        let text = self.read_key(keys::CURRENT_USER)?;
        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(error) => {
                err!("Invalid session in the vault! This may be a sign of corruption.\nError: {error}");
                self.backend.quarantine(keys::CURRENT_USER);
                None
            }
        }
    }

    /// Overwrite the session slot.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        let text = serde_json::to_string(session).json_to()?;
        self.backend.set(keys::CURRENT_USER, &text)?;
        Ok(())
    }

    /// Create a new account.
    ///
    /// Checks, in order: the password confirmation, the email and phone
    /// formats, then email uniqueness (case-sensitive) against the
    /// persisted collection. On success the new account is appended,
    /// persisted, and returned.
    pub fn register(&self, request: RegisterRequest) -> Result<Account> {
        if request.password != request.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        if !validation::is_valid_email(&request.email) {
            return Err(AccountError::InvalidEmail(request.email));
        }
        if !validation::is_valid_phone(&request.phone) {
            return Err(AccountError::InvalidPhone(request.phone));
        }

        let mut accounts = self.list_accounts();
        if accounts.iter().any(|account| account.email == request.email) {
            return Err(AccountError::EmailTaken(request.email));
        }

        let account = Account {
            id: next_account_id(&accounts),
            name: request.name,
            email: request.email,
            phone: request.phone,
            password_hash: password::hash_password(&request.password)?,
            registered_date: chrono::Utc::now(),
        };

        accounts.push(account.clone());
        self.save_accounts(&accounts)?;

        info!("Registered account {} ({})", account.name, account.email);
        Ok(account)
    }

    /// Authenticate and open a session.
    ///
    /// Succeeds when some account matches the email (case-sensitive) and
    /// the password verifies against its stored hash. Unknown email and
    /// wrong password are indistinguishable to the caller.
    ///
    /// When `remember_me` is set, the remember flag is persisted; an
    /// unset checkbox leaves any previously persisted flag alone.
    pub fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<Session> {
        let accounts = self.list_accounts();
        let account = accounts
            .iter()
            .find(|account| {
                account.email == email
                    && password::verify_password(password, &account.password_hash)
            })
            .ok_or(AccountError::InvalidCredentials)?;

        let session = Session::from(account);
        self.save_session(&session)?;

        if remember_me {
            self.backend.set(keys::REMEMBER_ME, "true")?;
        }

        info!("Logged in as {} ({})", session.name, session.email);
        Ok(session)
    }

    /// Close the current session.
    ///
    /// The session slot is always cleared. If the remember flag was
    /// absent at the time of the call, the entire account collection is
    /// cleared too: logging out of an unremembered session forgets every
    /// registered account. That coupling is inherited from the system
    /// this replaces and is kept deliberately; see DESIGN.md before
    /// changing it.
    ///
    /// Removal failures on the medium are logged and ignored; the slots
    /// may already be gone.
    pub fn logout(&self) {
        let remembered = self.read_key(keys::REMEMBER_ME).is_some();

        if let Err(error) = self.backend.remove(keys::CURRENT_USER) {
            err!("Failed to clear the session slot: {error}");
        }

        if !remembered {
            if let Err(error) = self.backend.remove(keys::USERS) {
                err!("Failed to clear the account collection: {error}");
            }
        }

        info!("Logged out");
    }

    /// Whether the remember flag is currently persisted.
    ///
    /// Presence is what counts: the flag is only ever written as `true`,
    /// and logging in without the checkbox doesn't clear it.
    #[must_use]
    pub fn is_remembered(&self) -> bool {
        self.read_key(keys::REMEMBER_ME).is_some()
    }
}

/// Next free account id: one past the highest assigned so far.
///
/// Ids stay unique even after the collection shrinks mid-history,
/// because they only ever grow within one collection lifetime.
fn next_account_id(accounts: &[Account]) -> i64 {
    accounts
        .iter()
        .map(|account| account.id)
        .max()
        .map_or(1, |id| id + 1)
}
