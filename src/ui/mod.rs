/// UI layer: panel widgets and the central scatter plot.
pub mod panels;
pub mod plot;
