//! Mock USB transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::traits::{TransportError, UsbTransport};
use crate::protocol::Report;
use crate::protocol::constants::{RAZER_VENDOR_ID, pid};

/// Mock transport for unit testing dispatcher logic.
pub struct MockTransport {
    /// Queued response frames to return on read.
    response_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
    /// Captured writes.
    write_log: Arc<Mutex<Vec<Vec<u8>>>>,
    /// Simulated VID/PID.
    vid: u16,
    pid: u16,
    /// Whether device is "connected".
    connected: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            response_queue: Arc::new(Mutex::new(VecDeque::new())),
            write_log: Arc::new(Mutex::new(Vec::new())),
            vid: RAZER_VENDOR_ID,
            pid: pid::DEATHADDER_V2,
            connected: Arc::new(Mutex::new(true)),
        }
    }

    /// Queue a raw frame to be returned on next read.
    pub fn queue_response(&self, frame: &[u8]) {
        self.response_queue.lock().unwrap().push_back(frame.to_vec());
    }

    /// Queue a report, stamping its checksum first.
    pub fn queue_report(&self, mut report: Report) {
        report.set_checksum();
        self.queue_response(&report.pack());
    }

    /// Get all captured writes.
    pub fn get_writes(&self) -> Vec<Vec<u8>> {
        self.write_log.lock().unwrap().clone()
    }

    /// Clear captured writes.
    pub fn clear_writes(&self) {
        self.write_log.lock().unwrap().clear();
    }

    /// Simulate device disconnect.
    pub fn disconnect(&self) {
        *self.connected.lock().unwrap() = false;
    }

    /// Simulate device reconnect.
    pub fn reconnect(&self) {
        *self.connected.lock().unwrap() = true;
    }

    /// Set VID/PID for device-specific behavior testing.
    pub fn set_ids(&mut self, vid: u16, pid: u16) {
        self.vid = vid;
        self.pid = pid;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UsbTransport for MockTransport {
    fn send_report(&self, frame: &[u8]) -> Result<(), TransportError> {
        if !*self.connected.lock().unwrap() {
            return Err(TransportError::Disconnected);
        }
        self.write_log.lock().unwrap().push(frame.to_vec());
        Ok(())
    }

    fn read_report(&self) -> Result<Vec<u8>, TransportError> {
        if !*self.connected.lock().unwrap() {
            return Err(TransportError::Disconnected);
        }
        self.response_queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::ReadFailed("response queue empty".into()))
    }

    fn is_connected(&self) -> bool {
        *self.connected.lock().unwrap()
    }

    fn vendor_id(&self) -> u16 {
        self.vid
    }

    fn product_id(&self) -> u16 {
        self.pid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{REPORT_LEN, class, cmd};

    #[test]
    fn test_mock_response_queue() {
        let mock = MockTransport::new();
        mock.queue_report(Report::request(class::LED, cmd::SET_LED_EFFECT, 1));

        let frame = mock.read_report().unwrap();
        assert_eq!(frame.len(), REPORT_LEN);

        // Queue is empty now
        assert!(mock.read_report().is_err());
    }

    #[test]
    fn test_mock_write_capture() {
        let mock = MockTransport::new();
        mock.send_report(b"Hello").unwrap();
        mock.send_report(b"World").unwrap();

        let writes = mock.get_writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], b"Hello");
        assert_eq!(writes[1], b"World");
    }

    #[test]
    fn test_mock_disconnect() {
        let mock = MockTransport::new();
        assert!(mock.is_connected());

        mock.disconnect();
        assert!(!mock.is_connected());
        assert!(mock.send_report(b"test").is_err());
    }
}
