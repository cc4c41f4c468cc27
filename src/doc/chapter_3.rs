/*!
# Statements

Every statement starts with its word, except an assignment where `LET`
may be left out. `IN#` and `PR#` are listed as IN and PR.
*/

#[path = "statements/call.rs"]
#[allow(non_snake_case)]
pub mod CALL;

#[path = "statements/color.rs"]
#[allow(non_snake_case)]
pub mod COLOR;

#[path = "statements/dim.rs"]
#[allow(non_snake_case)]
pub mod DIM;

#[path = "statements/dsp.rs"]
#[allow(non_snake_case)]
pub mod DSP;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/gr.rs"]
#[allow(non_snake_case)]
pub mod GR;

#[path = "statements/hlin.rs"]
#[allow(non_snake_case)]
pub mod HLIN;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/in.rs"]
#[allow(non_snake_case)]
pub mod IN;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/nodsp.rs"]
#[allow(non_snake_case)]
pub mod NODSP;

#[path = "statements/notrace.rs"]
#[allow(non_snake_case)]
pub mod NOTRACE;

#[path = "statements/plot.rs"]
#[allow(non_snake_case)]
pub mod PLOT;

#[path = "statements/poke.rs"]
#[allow(non_snake_case)]
pub mod POKE;

#[path = "statements/pop.rs"]
#[allow(non_snake_case)]
pub mod POP;

#[path = "statements/pr.rs"]
#[allow(non_snake_case)]
pub mod PR;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/tab.rs"]
#[allow(non_snake_case)]
pub mod TAB;

#[path = "statements/text.rs"]
#[allow(non_snake_case)]
pub mod TEXT;

#[path = "statements/trace.rs"]
#[allow(non_snake_case)]
pub mod TRACE;

#[path = "statements/vlin.rs"]
#[allow(non_snake_case)]
pub mod VLIN;

#[path = "statements/vtab.rs"]
#[allow(non_snake_case)]
pub mod VTAB;
