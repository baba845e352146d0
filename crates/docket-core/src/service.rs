use crate::authorization::{Caller, RolePolicy};
use crate::config::ServiceConfig;
use crate::credentials::CredentialSource;
use crate::errors::DocketError;
use crate::operation::Operation;
use docket_model::{Docket, DocketEvent, PidStatus, Puuid};
use docket_store::{EventSink, Ledger};
use tracing::{debug, error, info, warn, Dispatch};

/// Collaborators for a single invocation.
///
/// A `Stub` borrows the ledger, event sink and caller credential for the
/// duration of one call. The service keeps nothing from it afterwards.
pub struct Stub<'a> {
    ledger: &'a mut dyn Ledger,
    events: &'a mut dyn EventSink,
    credentials: &'a dyn CredentialSource,
}

impl<'a> Stub<'a> {
    /// Bundles the collaborators for one invocation.
    pub fn new(
        ledger: &'a mut dyn Ledger,
        events: &'a mut dyn EventSink,
        credentials: &'a dyn CredentialSource,
    ) -> Self {
        Self {
            ledger,
            events,
            credentials,
        }
    }
}

/// Stateless Docket operations.
///
/// Log output goes to the [`Dispatch`] given at construction, not to the
/// process-wide default.
#[derive(Clone)]
pub struct DocketService {
    config: ServiceConfig,
    policy: RolePolicy,
    log: Dispatch,
}

impl DocketService {
    /// Creates a service logging to `log`.
    pub fn new(config: ServiceConfig, log: Dispatch) -> Self {
        let policy = RolePolicy::new(config.privileged_role.clone());
        Self {
            config,
            policy,
            log,
        }
    }

    /// Service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Logger the service writes to.
    pub fn logger(&self) -> &Dispatch {
        &self.log
    }

    pub(crate) fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.log, f)
    }

    /// Returns the raw bytes stored under `args[0]`, or `None` if nothing is.
    ///
    /// Reads are not role-gated and the bytes are not decoded.
    pub fn get_docket<S: AsRef<str>>(
        &self,
        stub: &mut Stub<'_>,
        args: &[S],
    ) -> Result<Option<Vec<u8>>, DocketError> {
        self.in_scope(|| -> Result<Option<Vec<u8>>, DocketError> {
            debug!("entering get_docket");
            let puuid: Puuid = argument(Operation::GetDocket, args, 0, "puuid")?;
            let stored = read(stub, &puuid)?;
            if stored.is_none() {
                debug!(%puuid, "no docket stored");
            }
            Ok(stored)
        })
    }

    /// Stores `args[1]` verbatim under `args[0]` and emits `docketCreation`.
    ///
    /// Any previous value is overwritten. If the event cannot be emitted the
    /// write has still happened and [`DocketError::EventDeliveryFailure`] is
    /// returned.
    pub fn create_docket<S: AsRef<str>>(
        &self,
        stub: &mut Stub<'_>,
        args: &[S],
    ) -> Result<(), DocketError> {
        self.in_scope(|| -> Result<(), DocketError> {
            debug!("entering create_docket");
            self.authorize(stub, Operation::CreateDocket)?;
            let puuid: Puuid = argument(Operation::CreateDocket, args, 0, "puuid")?;
            let payload: String = argument(Operation::CreateDocket, args, 1, "payload")?;

            write(stub, &puuid, payload.as_bytes())?;
            self.notify(stub, &puuid, DocketEvent::created(puuid.as_str()))?;
            info!(%puuid, "docket created");
            Ok(())
        })
    }

    /// Sets `itempid.pidstatus` of the Docket under `args[0]` to `args[1]`
    /// and emits `docketUpdate`.
    ///
    /// Fails with [`DocketError::NotFound`] if nothing is stored and with
    /// [`DocketError::MalformedRecord`] if the stored bytes are not a Docket.
    pub fn update_docket<S: AsRef<str>>(
        &self,
        stub: &mut Stub<'_>,
        args: &[S],
    ) -> Result<(), DocketError> {
        self.in_scope(|| -> Result<(), DocketError> {
            debug!("entering update_docket");
            self.authorize(stub, Operation::UpdateDocket)?;
            let puuid: Puuid = argument(Operation::UpdateDocket, args, 0, "puuid")?;
            let status: PidStatus = argument(Operation::UpdateDocket, args, 1, "status")?;

            let stored = read(stub, &puuid)?.ok_or_else(|| {
                warn!(%puuid, "cannot update missing docket");
                DocketError::NotFound {
                    puuid: puuid.to_string(),
                }
            })?;
            let mut docket = Docket::from_slice(&stored).map_err(|source| {
                error!(%puuid, error = %source, "stored docket could not be decoded");
                DocketError::MalformedRecord {
                    puuid: puuid.to_string(),
                    source,
                }
            })?;
            docket.item_pid.pid_status = status.to_string();
            let encoded = docket.to_bytes().map_err(|e| {
                error!(%puuid, error = %e, "could not encode docket after update");
                DocketError::Encoding(e)
            })?;

            write(stub, &puuid, &encoded)?;
            self.notify(stub, &puuid, DocketEvent::updated(puuid.as_str()))?;
            info!(%puuid, %status, "docket status updated");
            Ok(())
        })
    }

    fn authorize(&self, stub: &Stub<'_>, operation: Operation) -> Result<(), DocketError> {
        let caller = Caller::resolve(stub.credentials);
        self.policy.authorize(&caller, operation)
    }

    fn notify(
        &self,
        stub: &mut Stub<'_>,
        puuid: &Puuid,
        event: DocketEvent,
    ) -> Result<(), DocketError> {
        let payload = event.to_bytes()?;
        stub.events
            .emit(&self.config.event_name, &payload)
            .map_err(|source| {
                error!(%puuid, error = %source, "docket written but event not delivered");
                DocketError::EventDeliveryFailure {
                    puuid: puuid.to_string(),
                    event: event.event_type.as_str(),
                    source,
                }
            })
    }
}

fn read(stub: &Stub<'_>, puuid: &Puuid) -> Result<Option<Vec<u8>>, DocketError> {
    stub.ledger.get(puuid.as_str()).map_err(|source| {
        error!(%puuid, error = %source, "could not fetch docket from ledger");
        DocketError::StorageFailure {
            puuid: puuid.to_string(),
            source,
        }
    })
}

fn write(stub: &mut Stub<'_>, puuid: &Puuid, value: &[u8]) -> Result<(), DocketError> {
    stub.ledger.put(puuid.as_str(), value).map_err(|source| {
        error!(%puuid, error = %source, "could not save docket to ledger");
        DocketError::StorageFailure {
            puuid: puuid.to_string(),
            source,
        }
    })
}

/// Extracts a required, non-empty positional argument.
fn argument<T: From<String>, S: AsRef<str>>(
    operation: Operation,
    args: &[S],
    index: usize,
    name: &'static str,
) -> Result<T, DocketError> {
    match args.get(index).map(|s| s.as_ref()) {
        Some(value) if !value.is_empty() => Ok(T::from(value.to_string())),
        _ => {
            error!(%operation, argument = name, got = args.len(), "invalid number of arguments");
            Err(DocketError::MissingArgument {
                operation,
                argument: name,
            })
        }
    }
}
