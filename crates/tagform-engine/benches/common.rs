// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use tagform_engine::Composed;
use tagform_engine::model::{body, div, html, img, p};

/// A description source with `sections` sibling divs, each holding a few
/// paragraphs and an image.
#[allow(dead_code)]
pub fn generate_wide_description(sections: usize) -> String {
    let mut source = String::from("type Section = Div<[\n  P<'Some paragraph content.'>,\n  P<'Another paragraph.'>,\n  Img<{ src: 'x.png', width: 320 }>,\n]>;\n\n");
    source.push_str("type Page = Html<Body<[\n");
    for _ in 0..sections {
        source.push_str("  Section,\n");
    }
    source.push_str("]>>;\n");
    source
}

/// Divs nested `depth` levels inside a body.
#[allow(dead_code)]
pub fn generate_deep_tree(depth: usize) -> Composed {
    let mut inner = p("innermost");
    for _ in 0..depth {
        inner = div(inner);
    }
    html(body(inner))
}

/// A body with `count` sibling paragraphs and images.
#[allow(dead_code)]
pub fn generate_wide_tree(count: usize) -> Composed {
    let children: Vec<Composed> = (0..count)
        .map(|i| {
            if i % 2 == 0 {
                p(format!("Paragraph {i}"))
            } else {
                img().with_attribute("src", format!("image-{i}.png"))
            }
        })
        .collect();
    html(body(children))
}
