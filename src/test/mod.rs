mod field;
mod full_domain;
mod key;
mod prg;
