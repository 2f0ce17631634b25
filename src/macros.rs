/// Capture the current call site as a [`CallFrame`].
///
/// This is the crate's substitute for runtime stack walking: the `log_*!`
/// macros attach the frame of the line that invoked them, and callers that
/// want deeper context chain [`LogRequest::frame`] themselves, outermost
/// frame first.
///
/// [`CallFrame`]: crate::record::CallFrame
/// [`LogRequest::frame`]: crate::emitter::LogRequest::frame
#[macro_export]
macro_rules! frame {
    () => {
        $crate::record::CallFrame {
            component: module_path!().to_string(),
            file: file!().to_string(),
            line: line!(),
        }
    };
}

/// Emit a `Success` record with the call site attached.
#[macro_export]
macro_rules! log_success {
    ($emitter:expr, $head:expr) => {
        $emitter.emit($crate::emitter::LogRequest::success($head).frame($crate::frame!()))
    };
    ($emitter:expr, $head:expr, $body:expr) => {
        $emitter.emit(
            $crate::emitter::LogRequest::success($head)
                .body($body)
                .frame($crate::frame!()),
        )
    };
}

/// Emit an `Information` record with the call site attached.
#[macro_export]
macro_rules! log_info {
    ($emitter:expr, $head:expr) => {
        $emitter.emit($crate::emitter::LogRequest::info($head).frame($crate::frame!()))
    };
    ($emitter:expr, $head:expr, $body:expr) => {
        $emitter.emit(
            $crate::emitter::LogRequest::info($head)
                .body($body)
                .frame($crate::frame!()),
        )
    };
}

/// Emit a `Warning` record with the call site attached.
#[macro_export]
macro_rules! log_warning {
    ($emitter:expr, $head:expr) => {
        $emitter.emit($crate::emitter::LogRequest::warning($head).frame($crate::frame!()))
    };
    ($emitter:expr, $head:expr, $body:expr) => {
        $emitter.emit(
            $crate::emitter::LogRequest::warning($head)
                .body($body)
                .frame($crate::frame!()),
        )
    };
}

/// Emit an `Error` record with the call site attached.
#[macro_export]
macro_rules! log_error {
    ($emitter:expr, $head:expr) => {
        $emitter.emit($crate::emitter::LogRequest::error($head).frame($crate::frame!()))
    };
    ($emitter:expr, $head:expr, $body:expr) => {
        $emitter.emit(
            $crate::emitter::LogRequest::error($head)
                .body($body)
                .frame($crate::frame!()),
        )
    };
}

/// Emit a `Debug` record with the call site attached.
#[macro_export]
macro_rules! log_debug {
    ($emitter:expr, $head:expr) => {
        $emitter.emit($crate::emitter::LogRequest::debug($head).frame($crate::frame!()))
    };
    ($emitter:expr, $head:expr, $body:expr) => {
        $emitter.emit(
            $crate::emitter::LogRequest::debug($head)
                .body($body)
                .frame($crate::frame!()),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::config::{keys, Configuration};
    use crate::emitter::Emitter;
    use chrono::Utc;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn frame_captures_this_call_site() {
        let frame = frame!();
        assert_eq!(frame.component, "unclog::macros::tests");
        assert!(frame.file.ends_with("macros.rs"));
        assert!(frame.line > 0);
    }

    #[test]
    fn emit_macros_attach_the_call_site() {
        let root = tempdir().unwrap();
        let mut config = Configuration::default();
        config.set(keys::LOG_PATH, root.path().to_string_lossy().to_string());
        config.set(keys::SHOW_LOGS, false);
        let emitter = Emitter::new(config);

        log_error!(emitter, "it broke", serde_json::json!({"code": 7}));

        let day = Utc::now().format("%Y-%m-%d");
        let contents = fs::read_to_string(root.path().join(format!("{}.unclog", day))).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(parsed["Type"], "Error");
        assert_eq!(parsed["Body"]["code"], 7);
        assert_eq!(parsed["CallStack"][0]["Component"], "unclog::macros::tests");
        assert!(parsed["CallStack"][0]["File"]
            .as_str()
            .unwrap()
            .ends_with("macros.rs"));
    }
}
