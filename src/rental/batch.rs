//! Auditing many independent test cases

use tracing::info_span;

use crate::config::ValidationLimits;
use crate::fleet::FleetCatalog;
use crate::protocol::TestCase;
use crate::rental::RentalService;
use crate::types::*;
use crate::utils::{EnhancedCarValidator, EnhancedEventValidator};

impl TestCase {
    /// Load this test case into a service that enforces `limits`
    ///
    /// Every car is registered before the first event is logged.
    pub fn into_service(self, limits: &ValidationLimits) -> RentalResult<RentalService> {
        let mut service = RentalService::with_validators(
            FleetCatalog::new(),
            Box::new(EnhancedCarValidator::new(limits.clone())),
            Box::new(EnhancedEventValidator::new(limits.clone())),
        );

        for car in self.cars {
            service.register_car(car)?;
        }
        service.log_events(self.events)?;

        Ok(service)
    }

    /// Load and audit this test case
    pub fn audit(self, limits: &ValidationLimits) -> RentalResult<AuditReport> {
        self.into_service(limits)?.audit()
    }
}

/// Audit independent test cases in parallel, returning reports in input order
///
/// Each test case runs on the blocking pool with its own service. The first failed test case, in
/// input order, fails the batch.
pub async fn audit_all(
    cases: Vec<TestCase>,
    limits: &ValidationLimits,
) -> RentalResult<Vec<AuditReport>> {
    let mut handles = Vec::with_capacity(cases.len());
    for (index, case) in cases.into_iter().enumerate() {
        let limits = limits.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let _span = info_span!("test_case", index).entered();
            case.audit(&limits)
        }));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let report = handle
            .await
            .map_err(|e| RentalError::Internal(format!("Audit task failed: {}", e)))??;
        reports.push(report);
    }

    Ok(reports)
}
