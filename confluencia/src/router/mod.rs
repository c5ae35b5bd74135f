mod confluence;
mod single;
