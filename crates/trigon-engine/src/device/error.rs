use std::fmt;
use std::sync::Arc;

/// Category of an error raised by the device outside of any error scope.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DeviceErrorKind {
    Validation,
    OutOfMemory,
    Internal,
    DeviceLost,
}

impl fmt::Display for DeviceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceErrorKind::Validation => "validation",
            DeviceErrorKind::OutOfMemory => "out of memory",
            DeviceErrorKind::Internal => "internal",
            DeviceErrorKind::DeviceLost => "device lost",
        };
        f.write_str(s)
    }
}

/// Receiver for uncaptured device errors.
///
/// Reports are observational: the device keeps running and later frames may
/// come out blank or inconsistent. wgpu can invoke the sink from its own
/// threads.
pub trait ErrorSink: Send + Sync {
    fn report(&self, kind: DeviceErrorKind, message: Option<&str>);
}

/// Sink that forwards every report to the `log` facade at error level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, kind: DeviceErrorKind, message: Option<&str>) {
        match message {
            Some(msg) => log::error!("uncaptured device error ({kind}): {msg}"),
            None => log::error!("uncaptured device error ({kind})"),
        }
    }
}

/// Splits a wgpu error into its kind and optional message.
pub(crate) fn classify_device_error(err: &wgpu::Error) -> (DeviceErrorKind, Option<String>) {
    match err {
        wgpu::Error::Validation { description, .. } => {
            (DeviceErrorKind::Validation, Some(description.clone()))
        }
        wgpu::Error::OutOfMemory { .. } => (DeviceErrorKind::OutOfMemory, None),
        other => (DeviceErrorKind::Internal, Some(other.to_string())),
    }
}

pub(crate) fn forward_device_error(sink: &dyn ErrorSink, err: &wgpu::Error) {
    let (kind, message) = classify_device_error(err);
    sink.report(kind, message.as_deref());
}

/// Routes the device's uncaptured errors and loss notification to `sink`.
pub(crate) fn install_error_handlers(device: &wgpu::Device, sink: Arc<dyn ErrorSink>) {
    let on_error = Arc::clone(&sink);
    let handler: Box<dyn wgpu::UncapturedErrorHandler> = Box::new(move |err: wgpu::Error| {
        forward_device_error(on_error.as_ref(), &err);
    });
    device.on_uncaptured_error(handler.into());

    device.set_device_lost_callback(move |reason, message| {
        // Dropping the device reports `Destroyed`; that is teardown, not loss.
        if matches!(reason, wgpu::DeviceLostReason::Destroyed) {
            log::debug!("device destroyed: {message}");
            return;
        }
        let message = if message.is_empty() { None } else { Some(message.as_str()) };
        sink.report(DeviceErrorKind::DeviceLost, message);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        reports: Mutex<Vec<(DeviceErrorKind, Option<String>)>>,
    }

    impl ErrorSink for RecordingSink {
        fn report(&self, kind: DeviceErrorKind, message: Option<&str>) {
            self.reports
                .lock()
                .unwrap()
                .push((kind, message.map(str::to_owned)));
        }
    }

    #[test]
    fn validation_keeps_description() {
        let err = wgpu::Error::Validation {
            source: Box::new(fmt::Error),
            description: "shader entry point missing".to_string(),
        };
        let (kind, message) = classify_device_error(&err);
        assert_eq!(kind, DeviceErrorKind::Validation);
        assert_eq!(message.as_deref(), Some("shader entry point missing"));
    }

    #[test]
    fn out_of_memory_has_no_message() {
        let err = wgpu::Error::OutOfMemory { source: Box::new(fmt::Error) };
        assert_eq!(classify_device_error(&err), (DeviceErrorKind::OutOfMemory, None));
    }

    #[test]
    fn forwarded_errors_reach_sink_in_order() {
        let sink = RecordingSink::default();
        forward_device_error(
            &sink,
            &wgpu::Error::Validation {
                source: Box::new(fmt::Error),
                description: "bad blend".to_string(),
            },
        );
        forward_device_error(&sink, &wgpu::Error::OutOfMemory { source: Box::new(fmt::Error) });

        let reports = sink.reports.lock().unwrap();
        assert_eq!(
            *reports,
            vec![
                (DeviceErrorKind::Validation, Some("bad blend".to_string())),
                (DeviceErrorKind::OutOfMemory, None),
            ]
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(DeviceErrorKind::OutOfMemory.to_string(), "out of memory");
        assert_eq!(DeviceErrorKind::DeviceLost.to_string(), "device lost");
    }
}
