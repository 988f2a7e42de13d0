mod collections;
mod parser;

fn r(num: i32, den: i32) -> crate::Rational {
    crate::Rational::new(num, den).expect("invalid test fraction")
}
