/// Filename the interpreter assigns to code passed via `-c`. Every traceback
/// frame carrying this name belongs to the harness below, not to user code.
pub const HARNESS_FILENAME: &str = "<string>";

/// Python program run inside the child. It compiles the candidate (read from
/// stdin) under the candidate's own path identity, executes it in a minimal
/// globals scope, and writes a one-shot JSON report: `frames` is null on clean
/// completion, otherwise the traceback chain oldest call first. Errors that
/// carry their own file/line attribution (SyntaxError and kin) contribute one
/// extra synthetic frame at the end.
pub const HARNESS: &str = r#"
import json, os, sys

report_path = sys.argv[1]
identity = sys.argv[2]
source = sys.stdin.read()

sys.path.insert(0, os.path.dirname(identity) or ".")
scope = {"__name__": "__main__", "__builtins__": __builtins__}

frames = None
try:
    exec(compile(source, identity, "exec"), scope)
except BaseException:
    _ty, exc, tb = sys.exc_info()
    frames = []
    while tb is not None:
        frames.append({"file": tb.tb_frame.f_code.co_filename, "line": tb.tb_lineno})
        tb = tb.tb_next
    filename = getattr(exc, "filename", None)
    lineno = getattr(exc, "lineno", None)
    if filename and lineno:
        frames.append({"file": filename, "line": lineno})

with open(report_path, "w") as fh:
    json.dump({"frames": frames}, fh)
"#;
