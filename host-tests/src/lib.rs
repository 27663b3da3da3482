//! Host-based tests for the ESP32 provisioner
//! These drive whole boot → request → restart flows against the in-memory
//! doubles, on the development machine rather than the ESP32.
