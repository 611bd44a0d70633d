pub mod input;
pub mod render;

pub const HELP: &[&str] = &[
    "Commands:",
    "  n, next, <enter>   next page",
    "  p, prev            previous page",
    "  e <number>         select episode",
    "  m, mode            toggle page-by-page / continuous",
    "  open <location>    open /manga/<slug>/read[/<episode>[/<page>]]",
    "  h, help            show this help",
    "  q, quit            leave the reader",
];
