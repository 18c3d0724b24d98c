use crate::domain::model::ReportEvent;
use crate::domain::ports::{OrderProcessor, ReportSink};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative_amount};

pub struct BasicOrderProcessor<R: ReportSink> {
    reporter: R,
}

impl<R: ReportSink> BasicOrderProcessor<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }
}

impl<R: ReportSink> OrderProcessor for BasicOrderProcessor<R> {
    fn calculate_total(&self, price: f64, quantity: u32) -> Result<f64> {
        validate_non_negative_amount("price", price)?;

        let total = price * f64::from(quantity);
        if !total.is_finite() {
            return Err(OrderError::invalid_input(
                "price",
                price,
                format!("Order total overflows for quantity {}", quantity),
            ));
        }
        tracing::debug!(price, quantity, total, "Calculated order total");

        self.reporter.emit(&ReportEvent::TotalCalculated { total })?;
        Ok(total)
    }

    fn place_order(&self, customer_name: &str, address: &str) -> Result<()> {
        validate_non_empty_string("customer_name", customer_name)?;
        validate_non_empty_string("address", address)?;

        tracing::debug!(customer_name, address, "Placing order");
        self.reporter.emit(&ReportEvent::OrderPlaced {
            customer_name: customer_name.to_string(),
            address: address.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reporter::MemoryReporter;

    #[test]
    fn test_calculate_total_returns_product() {
        let reporter = MemoryReporter::new();
        let processor = BasicOrderProcessor::new(reporter.clone());

        let cases = [(10.0, 2, 20.0), (0.1, 3, 0.3), (19.99, 1, 19.99), (0.0, 7, 0.0)];
        for (price, quantity, expected) in cases {
            let total = processor.calculate_total(price, quantity).unwrap();
            assert!((total - expected).abs() < 1e-9, "{} * {}", price, quantity);
        }

        assert_eq!(reporter.events().len(), cases.len());
        assert_eq!(
            reporter.events()[0],
            ReportEvent::TotalCalculated { total: 20.0 }
        );
    }

    #[test]
    fn test_calculate_total_rejects_negative_price() {
        let reporter = MemoryReporter::new();
        let processor = BasicOrderProcessor::new(reporter.clone());

        let err = processor.calculate_total(-5.0, 2).unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput { ref field, .. } if field == "price"));
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_calculate_total_rejects_overflowing_total() {
        let reporter = MemoryReporter::new();
        let processor = BasicOrderProcessor::new(reporter.clone());

        let err = processor.calculate_total(f64::MAX, 2).unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput { ref field, .. } if field == "price"));
        assert!(err.to_string().contains("overflows"));
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_calculate_total_accepts_zero_quantity() {
        let reporter = MemoryReporter::new();
        let processor = BasicOrderProcessor::new(reporter.clone());

        let total = processor.calculate_total(10.0, 0).unwrap();
        assert_eq!(total, 0.0);
        assert_eq!(reporter.lines(), vec!["Order total: $0.0"]);
    }

    #[test]
    fn test_place_order_twice_emits_identical_events() {
        let reporter = MemoryReporter::new();
        let processor = BasicOrderProcessor::new(reporter.clone());

        processor.place_order("John Doe", "123 Main St").unwrap();
        processor.place_order("John Doe", "123 Main St").unwrap();

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], events[1]);
        assert_eq!(
            reporter.lines()[0],
            "Order placed for John Doe at 123 Main St"
        );
    }

    #[test]
    fn test_place_order_rejects_blank_fields() {
        let processor = BasicOrderProcessor::new(MemoryReporter::new());

        assert!(processor.place_order("", "123 Main St").is_err());
        assert!(processor.place_order("John Doe", "  ").is_err());
    }
}
