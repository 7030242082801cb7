<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Photo preview modal dialog</description>
   <name>div_PreviewModal</name>
   <tag></tag>
   <elementGuidId>review-preview-modal</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[@role='dialog' or contains(@class, 'modal')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[role='dialog'], .modal, [data-testid='preview-modal']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
