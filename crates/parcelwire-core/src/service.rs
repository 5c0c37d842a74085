//! Rate and shipment service facades
//!
//! A facade maps a domain request and hands the wire document to a
//! [`Transport`]. Sending, authentication and retries are the transport's
//! business.

use crate::config::MapperConfig;
use crate::error::Result;
use crate::mapper::{RateRequestMapper, ShipmentRequestMapper};
use crate::types::{RateRequest, ShipmentRequest};
use crate::wire;
use serde_json::Value;
use tracing::info;

/// Delivers wire documents to the carrier and returns its raw reply
pub trait Transport: Send + Sync {
    fn send_rate_request(&self, request: &wire::RateRequest) -> Result<Value>;

    fn send_shipment_request(&self, request: &wire::ShipmentRequest) -> Result<Value>;
}

/// Quotes rates through a transport
#[derive(Debug)]
pub struct RateService<T> {
    transport: T,
    mapper: RateRequestMapper,
}

impl<T: Transport> RateService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, MapperConfig::default())
    }

    pub fn with_config(transport: T, config: MapperConfig) -> Self {
        Self {
            transport,
            mapper: RateRequestMapper::with_config(config),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn collect_rates(&self, request: &RateRequest) -> Result<Value> {
        let document = self.mapper.map(request)?;
        info!(packages = document.packages().len(), "requesting rates");
        self.transport.send_rate_request(&document)
    }
}

/// Books shipments through a transport
#[derive(Debug)]
pub struct ShipmentService<T> {
    transport: T,
    mapper: ShipmentRequestMapper,
}

impl<T: Transport> ShipmentService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, MapperConfig::default())
    }

    pub fn with_config(transport: T, config: MapperConfig) -> Self {
        Self {
            transport,
            mapper: ShipmentRequestMapper::with_config(config),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn create_shipment(&self, request: &ShipmentRequest) -> Result<Value> {
        let document = self.mapper.map(request)?;
        info!(packages = document.packages().len(), "creating shipment");
        self.transport.send_shipment_request(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Address, Contact, Package, Party, RateDetails, ShipmentDetails};
    use crate::units::{DimensionUnit, Dimensions, Weight, WeightUnit};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<Value>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn record(&self, document: Value) -> Result<Value> {
            if self.fail {
                return Err(Error::Transport {
                    message: "connection refused".to_string(),
                    source: anyhow::anyhow!("connection refused"),
                });
            }
            self.sent.lock().unwrap().push(document);
            Ok(json!({"status": "ok"}))
        }
    }

    impl Transport for RecordingTransport {
        fn send_rate_request(&self, request: &wire::RateRequest) -> Result<Value> {
            self.record(serde_json::to_value(request)?)
        }

        fn send_shipment_request(&self, request: &wire::ShipmentRequest) -> Result<Value> {
            self.record(serde_json::to_value(request)?)
        }
    }

    fn ready_at() -> crate::types::Timestamp {
        chrono::DateTime::parse_from_rfc3339("2025-03-14T10:00:00+00:00").unwrap()
    }

    fn address() -> Address {
        Address::new("DE", "10115", "Berlin", vec!["Main Street 1".to_string()]).unwrap()
    }

    fn package() -> Package {
        Package::new(
            1,
            Weight { value: 1.0, unit: WeightUnit::Kg },
            Dimensions { length: 1.0, width: 1.0, height: 1.0, unit: DimensionUnit::Cm },
            "",
        )
    }

    #[test]
    fn test_collect_rates_sends_mapped_document() {
        let service = RateService::new(RecordingTransport::default());
        let request = RateRequest::new(RateDetails::new(ready_at()), "123", address(), address(), vec![package()]);

        let reply = service.collect_rates(&request).unwrap();
        assert_eq!(reply["status"], "ok");

        let sent = service.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["RequestedShipment"]["Account"], "123");
    }

    #[test]
    fn test_create_shipment_sends_mapped_document() {
        let party = Party::new(address(), Contact::new("Ada", "Engines Ltd", "+49"));
        let request = ShipmentRequest::new(
            ShipmentDetails::new(ready_at()),
            "123",
            party.clone(),
            party,
            vec![package()],
        );
        let service = ShipmentService::new(RecordingTransport::default());

        service.create_shipment(&request).unwrap();
        let sent = service.transport().sent.lock().unwrap();
        assert_eq!(sent[0]["RequestedShipment"]["ShipmentInfo"]["UnitOfMeasurement"], "SI");
    }

    #[test]
    fn test_mapping_errors_never_reach_transport() {
        let service = RateService::new(RecordingTransport::default());
        let request = RateRequest::new(RateDetails::new(ready_at()), "123", address(), address(), vec![]);

        assert!(matches!(service.collect_rates(&request), Err(Error::EmptyPackageList)));
        assert!(service.transport().sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_transport_errors_propagate() {
        let transport = RecordingTransport { fail: true, ..Default::default() };
        let service = RateService::new(transport);
        let request = RateRequest::new(RateDetails::new(ready_at()), "123", address(), address(), vec![package()]);

        let err = service.collect_rates(&request).unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
