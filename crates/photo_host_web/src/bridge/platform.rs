pub(crate) fn is_native_platform() -> bool {
    super::interop::is_native_platform()
}
