use crate::errors::DocketError;
use crate::operation::Operation;
use crate::service::{DocketService, Stub};
use tracing::warn;

/// Routes a function name and positional arguments to the service.
///
/// `invoke` reaches every enabled operation; `query` only the read-only ones.
/// Every result is a byte payload, empty when the operation returns nothing.
#[derive(Clone)]
pub struct Dispatcher {
    service: DocketService,
}

impl Dispatcher {
    /// Creates a dispatcher over `service`.
    pub fn new(service: DocketService) -> Self {
        Self { service }
    }

    /// Underlying service.
    pub fn service(&self) -> &DocketService {
        &self.service
    }

    /// Deployment hook. There is no state to initialize.
    pub fn init<S: AsRef<str>>(&self, _args: &[S]) -> Result<Vec<u8>, DocketError> {
        Ok(Vec::new())
    }

    /// Runs `function` with `args`.
    pub fn invoke<S: AsRef<str>>(
        &self,
        stub: &mut Stub<'_>,
        function: &str,
        args: &[S],
    ) -> Result<Vec<u8>, DocketError> {
        let operation = self.resolve(function)?;
        self.run(stub, operation, args)
    }

    /// Runs `function` with `args` if it does not modify the ledger.
    pub fn query<S: AsRef<str>>(
        &self,
        stub: &mut Stub<'_>,
        function: &str,
        args: &[S],
    ) -> Result<Vec<u8>, DocketError> {
        let operation = self.resolve(function)?;
        if operation.mutates() {
            self.service.in_scope(|| {
                warn!(%operation, "mutating operation sent as query");
            });
            return Err(DocketError::NotQueryable { operation });
        }
        self.run(stub, operation, args)
    }

    fn resolve(&self, function: &str) -> Result<Operation, DocketError> {
        let resolved = match function.parse::<Operation>() {
            Ok(Operation::UpdateDocket) if !self.service.config().allow_update => {
                Err(DocketError::UnknownOperation {
                    function: function.to_string(),
                })
            }
            other => other,
        };
        if resolved.is_err() {
            self.service.in_scope(|| {
                warn!(function, "unknown operation");
            });
        }
        resolved
    }

    fn run<S: AsRef<str>>(
        &self,
        stub: &mut Stub<'_>,
        operation: Operation,
        args: &[S],
    ) -> Result<Vec<u8>, DocketError> {
        match operation {
            Operation::GetDocket => Ok(self.service.get_docket(stub, args)?.unwrap_or_default()),
            Operation::CreateDocket => {
                self.service.create_docket(stub, args)?;
                Ok(Vec::new())
            }
            Operation::UpdateDocket => {
                self.service.update_docket(stub, args)?;
                Ok(Vec::new())
            }
        }
    }
}
