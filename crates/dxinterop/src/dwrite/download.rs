//! Remote font download queue and completion listeners

use comvtable::{ComPtr, HRESULT, IUnknown, Result, check_call, com_interface, com_object};

use crate::foundation::{BOOL, from_bool};

/// Receives download completion notifications
#[com_interface("b06fe5b9-43ec-4393-881b-dbe4dc72fda7")]
pub trait IDWriteFontDownloadListener {
    /// `context` is whatever was passed to `BeginDownload`, possibly null.
    fn DownloadCompleted(
        &self,
        download_queue: *mut IDWriteFontDownloadQueue,
        context: *mut IUnknown,
        download_result: HRESULT,
    );
}

/// The factory-wide queue of pending font download requests
#[com_interface("b71e6052-5aea-4fa3-832e-f60d431f7e91")]
pub trait IDWriteFontDownloadQueue {
    fn AddListener(&self, listener: *mut IDWriteFontDownloadListener, token: *mut u32) -> HRESULT;
    fn RemoveListener(&self, token: u32) -> HRESULT;
    fn IsEmpty(&self) -> BOOL;
    fn BeginDownload(&self, context: *mut IUnknown) -> HRESULT;
    fn CancelDownload(&self) -> HRESULT;
    /// Incremented each time a download completes
    fn GetGenerationCount(&self) -> u64;
}

impl IDWriteFontDownloadQueue {
    /// Register `listener`; the returned token removes it again.
    pub fn add_listener(&self, listener: &IDWriteFontDownloadListener) -> Result<u32> {
        let mut token = 0;
        check_call("IDWriteFontDownloadQueue::AddListener", unsafe {
            self.AddListener(listener.as_raw(), &mut token)
        })?;
        Ok(token)
    }

    pub fn remove_listener(&self, token: u32) -> Result<()> {
        check_call("IDWriteFontDownloadQueue::RemoveListener", unsafe {
            self.RemoveListener(token)
        })?;
        Ok(())
    }

    /// Register `listener` for as long as the returned guard lives.
    pub fn register(&self, listener: &IDWriteFontDownloadListener) -> Result<ListenerToken> {
        let token = self.add_listener(listener)?;
        Ok(ListenerToken {
            queue: ComPtr::from_ref(self),
            token,
        })
    }

    pub fn is_empty(&self) -> bool {
        from_bool(unsafe { self.IsEmpty() })
    }

    /// Start downloading everything queued. Completion is reported to the
    /// listeners with `context`.
    pub fn begin_download(&self, context: Option<&IUnknown>) -> Result<()> {
        let context = context.map_or(std::ptr::null_mut(), IUnknown::as_raw);
        check_call("IDWriteFontDownloadQueue::BeginDownload", unsafe {
            self.BeginDownload(context)
        })?;
        Ok(())
    }

    pub fn cancel_download(&self) -> Result<()> {
        check_call("IDWriteFontDownloadQueue::CancelDownload", unsafe {
            self.CancelDownload()
        })?;
        Ok(())
    }

    pub fn generation_count(&self) -> u64 {
        unsafe { self.GetGenerationCount() }
    }
}

/// Removes a download listener from its queue when dropped
#[derive(Debug)]
pub struct ListenerToken {
    queue: ComPtr<IDWriteFontDownloadQueue>,
    token: u32,
}

impl ListenerToken {
    /// The native registration token
    #[must_use]
    pub fn token(&self) -> u32 {
        self.token
    }
}

impl Drop for ListenerToken {
    fn drop(&mut self) {
        if let Err(err) = self.queue.remove_listener(self.token) {
            log::debug!("listener {} stayed registered: {}", self.token, err);
        }
    }
}

type CompletionCallback = Box<dyn Fn(Option<&IUnknown>, HRESULT)>;

com_object! {
    /// A download listener backed by a Rust closure.
    ///
    /// The closure receives the `BeginDownload` context and the download
    /// status exactly as the queue reported them.
    pub struct FontDownloadListener: IDWriteFontDownloadListener {
        callback: CompletionCallback,
    }
}

impl FontDownloadListener {
    pub fn new(
        callback: impl Fn(Option<&IUnknown>, HRESULT) + 'static,
    ) -> ComPtr<IDWriteFontDownloadListener> {
        Self::create(Box::new(callback))
    }
}

impl IDWriteFontDownloadListenerImpl for FontDownloadListener {
    fn DownloadCompleted(
        &self,
        _download_queue: *mut IDWriteFontDownloadQueue,
        context: *mut IUnknown,
        download_result: HRESULT,
    ) {
        log::trace!("font download completed: HRESULT 0x{:08X}", download_result);
        let context = unsafe { context.as_ref() };
        (self.callback)(context, download_result);
    }
}
