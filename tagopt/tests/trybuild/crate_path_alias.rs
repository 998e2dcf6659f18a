//! Trybuild fixture verifying `#[tagopt(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use tagopt as opts;
use opts::TagOpt;

#[derive(Debug, Default, TagOpt)]
#[tagopt(crate = "opts")]
struct AliasedArgs {
    #[tagopt("s:v;l:value;d:hello")]
    value: String,
    #[tagopt("l:count")]
    count: i64,
}

fn main() {
    let mut args = AliasedArgs::default();
    let result = args.parse_args(["--count", "2"]);
    let _: opts::TagOptResult<()> = result;
    let _ = (&args.value, args.count);
}
