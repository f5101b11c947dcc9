mod feeding;
mod renewal;
mod reproduction;
