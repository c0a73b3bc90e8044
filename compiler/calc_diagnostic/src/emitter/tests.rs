use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn sample(line: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E6002, "too few args in call to f").with_line(Some(line))
}

#[test]
fn terminal_emitter_writes_one_line_each() {
    let mut emitter = TerminalEmitter::new(Vec::new());
    emitter.emit_all(&[sample(1), sample(2)]);
    emitter.flush();
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(
        text,
        "1: error: too few args in call to f\n2: error: too few args in call to f\n"
    );
}

#[test]
fn buffer_emitter_keeps_diagnostics() {
    let mut emitter = BufferEmitter::new();
    assert!(emitter.is_empty());
    emitter.emit(&sample(7));
    assert_eq!(emitter.len(), 1);
    assert_eq!(emitter.diagnostics(), &[sample(7)]);
    assert_eq!(emitter.rendered(), "7: error: too few args in call to f\n");
    emitter.clear();
    assert!(emitter.is_empty());
}

#[test]
fn silent_emitter_discards() {
    let mut emitter = SilentEmitter;
    emitter.emit(&sample(1));
    emitter.flush();
}

#[test]
fn mutable_reference_forwards_to_emitter() {
    let mut buffer = BufferEmitter::new();
    {
        let mut boxed: Box<dyn DiagnosticEmitter + '_> = Box::new(&mut buffer);
        boxed.emit(&sample(4));
    }
    assert_eq!(buffer.len(), 1);
}
