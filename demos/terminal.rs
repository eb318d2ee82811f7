use rm4scc::*;

const INK: &str = "\x1B[38;2;0;0;0m█";
const PAPER: &str = "\x1B[38;2;255;255;255m█";

// RM4SCC calls for two modules of clear space around the printed code.
const CLEAR_ZONE: usize = 2;

// Postcode BX1 1LT with delivery point suffix 1A.
const INPUT: &str = "BX11LT1A";
const BARS: usize = rm4scc_len!(8);

fn main() {
    let mut bars = [Bar::default(); BARS];
    let barcode = encode(INPUT, &mut bars).expect("postcode is alphanumeric");

    let render = Rm4sccRender::new(barcode);
    let width = render.width() as usize;
    let margin = str::repeat(PAPER, CLEAR_ZONE);
    let blank_row = str::repeat(PAPER, width + CLEAR_ZONE * 2);

    for _ in 0..CLEAR_ZONE {
        println!("{blank_row}");
    }
    let mut row = String::with_capacity(width * INK.len());
    for (i, on) in render.bits().enumerate() {
        row.push_str(if on { INK } else { PAPER });
        if (i + 1) % width == 0 {
            println!("{margin}{row}{margin}");
            row.clear();
        }
    }
    for _ in 0..CLEAR_ZONE {
        println!("{blank_row}");
    }
    println!("\x1B[0m");
}
