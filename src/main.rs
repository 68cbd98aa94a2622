use stablebox::{classify, value, Lazy, Value};

// built on first access, same table for every run
static SAMPLES: Lazy<[Value; 4]> = Lazy::new(|| {
    [
        value!(int 1),
        value!(double 2.1),
        value!(long 3),
        value!(str "hello"),
    ]
});

fn main() {
    for sample in SAMPLES.iter() {
        println!("{}", classify(sample));
    }
}
