use crate::core::constants::FFT_SIZE;
use crate::dom::js_err;
use web_sys as web;

/// media element -> analyser -> destination
///
/// Built once, on the first play, since browsers refuse to start an
/// AudioContext before a user gesture. A media element can only ever be
/// attached to one source node, so the graph is reused across tracks.
pub struct AudioGraph {
    ctx: web::AudioContext,
    source: web::MediaElementAudioSourceNode,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

impl AudioGraph {
    pub fn new(element: &web::HtmlAudioElement) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err)?;
        let analyser = web::AnalyserNode::new(&ctx).map_err(|e| {
            log::error!("AnalyserNode error: {:?}", e);
            js_err(e)
        })?;
        analyser.set_fft_size(FFT_SIZE);
        let source = ctx.create_media_element_source(element).map_err(|e| {
            log::error!("MediaElementAudioSourceNode error: {:?}", e);
            js_err(e)
        })?;
        source.connect_with_audio_node(&analyser).map_err(js_err)?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        let bins = vec![0; analyser.frequency_bin_count() as usize];
        log::info!("[player] audio graph ready, {} bins", bins.len());
        Ok(Self {
            ctx,
            source,
            analyser,
            bins,
        })
    }

    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    /// Current byte frequency data.
    pub fn sample(&mut self) -> &[u8] {
        let n = self.analyser.frequency_bin_count() as usize;
        if self.bins.len() != n {
            self.bins.resize(n, 0);
        }
        self.analyser.get_byte_frequency_data(&mut self.bins);
        &self.bins
    }

    pub fn close(self) {
        _ = self.source.disconnect();
        _ = self.analyser.disconnect();
        _ = self.ctx.close();
    }
}
