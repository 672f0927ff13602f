mod agreement;

pub use agreement::IAgreementMeasure;
