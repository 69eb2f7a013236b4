pub mod pam;
